use std::io::{self, Write};
use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use futures::future::join_all;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use aurora::activity::ActivityLog;
use aurora::api::{Request, Response, Session};
use aurora::banner::{BannerInfo, print_banner, print_session_summary};
use aurora::clock::SystemClock;
use aurora::commands::{CommandRegistry, CommandResult, SessionInfo};
use aurora::consts::{DEFAULT_INTROSPECTION_LEVEL, DEFAULT_MAX_IN_FLIGHT};
use aurora::dispatch::{DispatchConfig, QueryDispatcher};
use aurora::engine::Engine;
use aurora::engine::core::{CognitiveCore, CoreConfig};

#[derive(Parser)]
#[command(
    name = "aurora",
    version,
    about = "A small cognitive engine that tags the mood of your queries."
)]
struct Cli {
    /// Process the given query and exit (repeatable; queries run concurrently)
    #[arg(short, long)]
    query: Vec<String>,

    /// Print single-shot responses as JSON envelopes
    #[arg(long, default_value_t = false)]
    json: bool,

    /// Introspection level reported by the engine
    #[arg(long, default_value_t = DEFAULT_INTROSPECTION_LEVEL)]
    introspection_level: u8,

    /// Reload delay in milliseconds
    #[arg(long, default_value_t = 500)]
    reload_delay_ms: u64,

    /// Maximum queries in flight at once
    #[arg(long, default_value_t = DEFAULT_MAX_IN_FLIGHT)]
    max_in_flight: usize,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Diagnostics go to stderr so they never tangle with REPL output.
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let core = Arc::new(CognitiveCore::new(
        Box::new(SystemClock),
        ActivityLog::new(),
        CoreConfig {
            introspection_level: cli.introspection_level,
            reload_delay: Duration::from_millis(cli.reload_delay_ms),
        },
    ));

    // Single-shot mode exercises the host-facing api surface.
    if !cli.query.is_empty() {
        let session = Session::new(
            Arc::clone(&core) as Arc<dyn Engine>,
            DispatchConfig {
                max_in_flight: cli.max_in_flight,
            },
        );
        session.handle(Request::Load).await;

        let pending: Vec<_> = cli
            .query
            .iter()
            .map(|query| {
                session.handle(Request::ProcessQueryAsync {
                    query: query.clone(),
                })
            })
            .collect();
        for response in join_all(pending).await {
            print_response(&response, cli.json)?;
        }
        return Ok(());
    }

    print_banner(&BannerInfo {
        introspection_level: core.introspection_level(),
        reload_delay: Duration::from_millis(cli.reload_delay_ms),
        max_in_flight: cli.max_in_flight,
    });

    core.load().await;

    let dispatcher = QueryDispatcher::new(
        Arc::clone(&core) as Arc<dyn Engine>,
        DispatchConfig {
            max_in_flight: cli.max_in_flight,
        },
    );
    let registry = CommandRegistry::new();
    let mut queries_answered: u64 = 0;

    // REPL — async stdin so Ctrl+C is caught at the prompt too
    let stdin = BufReader::new(tokio::io::stdin());
    let mut lines = stdin.lines();

    loop {
        print!("\naurora> ");
        io::stdout().flush()?;

        // Read next line, interruptible by Ctrl+C
        let line = tokio::select! {
            result = lines.next_line() => {
                match result {
                    Ok(Some(line)) => line,
                    Ok(None) => {
                        // Ctrl+D (EOF)
                        println!();
                        break;
                    }
                    Err(e) => {
                        eprintln!("input error: {e}");
                        break;
                    }
                }
            }
            _ = tokio::signal::ctrl_c() => {
                println!();
                break;
            }
        };

        let input = line.trim();
        if input.is_empty() {
            continue;
        }

        let info = SessionInfo {
            core: &core,
            queries_answered,
        };
        match registry.dispatch(input, &info).await {
            CommandResult::Quit => break,
            CommandResult::Handled => continue,
            CommandResult::NotACommand => {}
        }

        // Ctrl+C during a query cancels the query, not the REPL
        let mut handle = dispatcher.submit(input);
        tokio::select! {
            result = &mut handle => {
                match result {
                    Ok(response) => {
                        queries_answered += 1;
                        println!("\n=> {response}");
                    }
                    Err(e) => eprintln!("\nerror: {e}"),
                }
            }
            _ = tokio::signal::ctrl_c() => {
                handle.cancel();
                println!("\n\ninterrupted");
            }
        }
    }

    print_session_summary(queries_answered, core.activity().len());
    Ok(())
}

fn print_response(response: &Response, json: bool) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string(response)?);
        return Ok(());
    }
    match response {
        Response::Reply { text } => println!("=> {text}"),
        Response::Status { loaded } => println!("=> loaded: {loaded}"),
        Response::Ack => println!("=> ok"),
        Response::Error { message } => eprintln!("error: {message}"),
    }
    Ok(())
}
