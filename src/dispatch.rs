//! Bounded asynchronous query execution.
//!
//! Submitting a query never blocks and never spawns beyond the
//! configured cap: every worker waits for a semaphore permit before it
//! touches the engine. The caller gets a [`QueryHandle`] to await or
//! cancel.

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll};

use tokio::sync::Semaphore;
use tokio::task::JoinHandle;
use tracing::warn;

use crate::consts::DEFAULT_MAX_IN_FLIGHT;
use crate::engine::{Engine, EngineError};

pub struct DispatchConfig {
    pub max_in_flight: usize,
}

impl Default for DispatchConfig {
    fn default() -> Self {
        Self {
            max_in_flight: DEFAULT_MAX_IN_FLIGHT,
        }
    }
}

/// Runs queries off the caller's back, at most `max_in_flight` at once.
pub struct QueryDispatcher {
    engine: Arc<dyn Engine>,
    permits: Arc<Semaphore>,
}

impl QueryDispatcher {
    pub fn new(engine: Arc<dyn Engine>, config: DispatchConfig) -> Self {
        Self {
            engine,
            permits: Arc::new(Semaphore::new(config.max_in_flight)),
        }
    }

    /// Schedule a query and return immediately. The handle resolves to
    /// exactly what a synchronous `process` call would have returned.
    pub fn submit(&self, query: &str) -> QueryHandle {
        let engine = Arc::clone(&self.engine);
        let permits = Arc::clone(&self.permits);
        let query = query.to_string();

        let task = tokio::spawn(async move {
            let _permit = permits
                .acquire_owned()
                .await
                .expect("dispatcher semaphore is never closed");
            engine.process(&query).await
        });

        QueryHandle { task }
    }
}

/// An opaque ticket for a pending response. Await it to get the
/// response, or [`cancel`](QueryHandle::cancel) to abandon it.
pub struct QueryHandle {
    task: JoinHandle<Result<String, EngineError>>,
}

impl QueryHandle {
    /// Abort the query if it has not finished. Awaiting afterwards
    /// reports [`EngineError::Cancelled`].
    pub fn cancel(&self) {
        self.task.abort();
    }

    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }
}

impl Future for QueryHandle {
    type Output = Result<String, EngineError>;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        Pin::new(&mut self.task).poll(cx).map(|joined| match joined {
            Ok(result) => result,
            Err(e) if e.is_cancelled() => Err(EngineError::Cancelled),
            Err(e) => {
                warn!("query worker died: {e}");
                Err(EngineError::Worker(e.to_string()))
            }
        })
    }
}
