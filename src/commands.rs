//! Built-in REPL commands prefixed with `/`.
//!
//! Commands implement the [`Command`] trait and are registered in a
//! [`CommandRegistry`]. The registry handles dispatch, alias
//! resolution, and dynamic help generation.

use async_trait::async_trait;
use std::sync::Arc;

use crate::engine::Engine;
use crate::engine::core::CognitiveCore;

/// Session info available to commands during execution.
pub struct SessionInfo<'a> {
    pub core: &'a Arc<CognitiveCore>,
    pub queries_answered: u64,
}

/// What the REPL should do after a command runs.
pub enum CommandResult {
    /// Not a command, pass the input to the engine as a query.
    NotACommand,
    /// Command handled, continue the REPL loop.
    Handled,
    /// Exit the REPL.
    Quit,
}

/// A REPL command. Implement this trait to add new commands.
#[async_trait]
pub trait Command: Send + Sync {
    /// Primary name, e.g. `"/status"`.
    fn name(&self) -> &str;

    /// Alternative names, e.g. `&["/h", "/?"]`.
    fn aliases(&self) -> &[&str] {
        &[]
    }

    /// One-line description for `/help`.
    fn description(&self) -> &str;

    /// Run the command.
    async fn execute(&self, info: &SessionInfo<'_>) -> CommandResult;
}

/// Holds registered commands.
pub struct CommandRegistry {
    commands: Vec<Arc<dyn Command>>,
}

impl CommandRegistry {
    /// Create a registry with all built-in commands.
    pub fn new() -> Self {
        let commands: Vec<Arc<dyn Command>> = vec![
            Arc::new(HelpCommand),
            Arc::new(StatusCommand),
            Arc::new(IntrospectCommand),
            Arc::new(LogCommand),
            Arc::new(ReloadCommand),
            Arc::new(QuitCommand),
        ];
        Self { commands }
    }

    /// Dispatch input to a matching command, or return `NotACommand`.
    pub async fn dispatch(&self, input: &str, info: &SessionInfo<'_>) -> CommandResult {
        let cmd = input.trim();

        for command in &self.commands {
            if cmd == command.name() || command.aliases().contains(&cmd) {
                // /help is special, it needs the registry to list all commands
                if command.name() == "/help" {
                    print!("{}", self.help_text());
                    return CommandResult::Handled;
                }
                return command.execute(info).await;
            }
        }

        if cmd.starts_with('/') {
            println!("unknown command: {cmd}");
            println!("type /help for available commands");
            return CommandResult::Handled;
        }

        CommandResult::NotACommand
    }

    fn help_text(&self) -> String {
        let mut text = String::from("available commands:\n");
        for command in &self.commands {
            text.push_str(&format!(
                "  {:<12} {}\n",
                command.name(),
                command.description()
            ));
        }
        text.push_str("anything else is sent to the engine as a query\n");
        text
    }
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::new()
    }
}

// --- Built-ins ---

struct HelpCommand;

#[async_trait]
impl Command for HelpCommand {
    fn name(&self) -> &str {
        "/help"
    }
    fn aliases(&self) -> &[&str] {
        &["/h", "/?"]
    }
    fn description(&self) -> &str {
        "show this help"
    }
    async fn execute(&self, _info: &SessionInfo<'_>) -> CommandResult {
        // Handled by the registry, which owns the command list.
        CommandResult::Handled
    }
}

struct StatusCommand;

#[async_trait]
impl Command for StatusCommand {
    fn name(&self) -> &str {
        "/status"
    }
    fn description(&self) -> &str {
        "show whether the engine core is loaded"
    }
    async fn execute(&self, info: &SessionInfo<'_>) -> CommandResult {
        if info.core.status() {
            println!("engine core: loaded");
        } else {
            println!("engine core: not loaded");
        }
        println!("queries answered this session: {}", info.queries_answered);
        CommandResult::Handled
    }
}

struct IntrospectCommand;

#[async_trait]
impl Command for IntrospectCommand {
    fn name(&self) -> &str {
        "/introspect"
    }
    fn aliases(&self) -> &[&str] {
        &["/i"]
    }
    fn description(&self) -> &str {
        "print the engine's introspection report"
    }
    async fn execute(&self, info: &SessionInfo<'_>) -> CommandResult {
        println!("{}", info.core.introspect().await);
        CommandResult::Handled
    }
}

struct LogCommand;

#[async_trait]
impl Command for LogCommand {
    fn name(&self) -> &str {
        "/log"
    }
    fn description(&self) -> &str {
        "dump the activity log"
    }
    async fn execute(&self, info: &SessionInfo<'_>) -> CommandResult {
        let entries = info.core.activity();
        if entries.is_empty() {
            println!("(activity log is empty)");
        } else {
            for (i, entry) in entries.iter().enumerate() {
                println!("{:>4}  {}", i + 1, entry);
            }
        }
        CommandResult::Handled
    }
}

struct ReloadCommand;

#[async_trait]
impl Command for ReloadCommand {
    fn name(&self) -> &str {
        "/reload"
    }
    fn description(&self) -> &str {
        "reload the engine core"
    }
    async fn execute(&self, info: &SessionInfo<'_>) -> CommandResult {
        println!("reloading...");
        info.core.reload().await;
        println!("engine core reloaded");
        CommandResult::Handled
    }
}

struct QuitCommand;

#[async_trait]
impl Command for QuitCommand {
    fn name(&self) -> &str {
        "/quit"
    }
    fn aliases(&self) -> &[&str] {
        &["quit", "exit", "/exit"]
    }
    fn description(&self) -> &str {
        "exit the session"
    }
    async fn execute(&self, _info: &SessionInfo<'_>) -> CommandResult {
        CommandResult::Quit
    }
}
