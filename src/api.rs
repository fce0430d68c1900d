//! Request/response surface for a host process.
//!
//! A [`Session`] owns one engine and its dispatcher; constructing the
//! session is the host-side `construct`. Each [`Request`] maps
//! one-to-one onto an engine operation, and the tagged serde
//! representation doubles as the wire format for a minimal local RPC.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::dispatch::{DispatchConfig, QueryDispatcher};
use crate::engine::Engine;

/// An operation requested by the host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Request {
    Load,
    ProcessQuery { query: String },
    ProcessQueryAsync { query: String },
    Introspect,
    Reload,
    Status,
}

/// What the host gets back. Errors are answers, not session failures;
/// the session stays usable after every response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Response {
    /// The operation completed and had nothing to say.
    Ack,
    /// A textual answer (process and introspect).
    Reply { text: String },
    /// The loaded flag.
    Status { loaded: bool },
    /// The operation failed.
    Error { message: String },
}

/// One engine, one dispatcher, one host connection's worth of state.
pub struct Session {
    engine: Arc<dyn Engine>,
    dispatcher: QueryDispatcher,
}

impl Session {
    pub fn new(engine: Arc<dyn Engine>, dispatch: DispatchConfig) -> Self {
        let dispatcher = QueryDispatcher::new(Arc::clone(&engine), dispatch);
        Self { engine, dispatcher }
    }

    pub async fn handle(&self, request: Request) -> Response {
        match request {
            Request::Load => {
                self.engine.load().await;
                Response::Ack
            }
            Request::ProcessQuery { query } => match self.engine.process(&query).await {
                Ok(text) => Response::Reply { text },
                Err(e) => Response::Error {
                    message: e.to_string(),
                },
            },
            Request::ProcessQueryAsync { query } => {
                // Same result as the synchronous path; only the latency
                // distribution differs.
                match self.dispatcher.submit(&query).await {
                    Ok(text) => Response::Reply { text },
                    Err(e) => Response::Error {
                        message: e.to_string(),
                    },
                }
            }
            Request::Introspect => Response::Reply {
                text: self.engine.introspect().await,
            },
            Request::Reload => {
                self.engine.reload().await;
                Response::Ack
            }
            Request::Status => Response::Status {
                loaded: self.engine.status(),
            },
        }
    }
}
