pub mod core;

use async_trait::async_trait;
use thiserror::Error;

/// Ways a query can fail. None of these poison the engine; it stays
/// usable after every one of them.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// `process` was called before `load`.
    #[error("engine core is not loaded, call load() first")]
    NotLoaded,
    /// The query's worker was cancelled before it produced a response.
    #[error("query was cancelled")]
    Cancelled,
    /// The query's worker died without reporting a result.
    #[error("query worker failed: {0}")]
    Worker(String),
}

/// The outermost boundary. main.rs and the api layer only know this trait.
#[async_trait]
pub trait Engine: Send + Sync {
    /// Initialize the core. Idempotent; always ends loaded.
    async fn load(&self);

    /// Answer a query. Requires a prior [`load`](Engine::load).
    async fn process(&self, query: &str) -> Result<String, EngineError>;

    /// Describe the core's recent activity. Read-only.
    async fn introspect(&self) -> String;

    /// Drop to unloaded, wait out the configured delay, load again.
    async fn reload(&self);

    /// Whether the core is currently loaded. No side effects.
    fn status(&self) -> bool;
}
