use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Local};
use tracing::{debug, info};

use super::{Engine, EngineError};
use crate::activity::ActivityLog;
use crate::classifier;
use crate::clock::Clock;
use crate::consts::{DEFAULT_INTROSPECTION_LEVEL, DEFAULT_RELOAD_DELAY, TIMESTAMP_FORMAT};

pub struct CoreConfig {
    /// Reported verbatim in introspection reports. Fixed for the
    /// lifetime of the core; no operation mutates it.
    pub introspection_level: u8,
    /// Pause between reload's unload and load phases.
    pub reload_delay: Duration,
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            introspection_level: DEFAULT_INTROSPECTION_LEVEL,
            reload_delay: DEFAULT_RELOAD_DELAY,
        }
    }
}

/// Loaded/unloaded flag plus the instant of the last completed call.
/// `last_query` is `Some` exactly when at least one load, process, or
/// reload has finished.
#[derive(Default)]
struct EngineState {
    loaded: bool,
    last_query: Option<DateTime<Local>>,
}

/// The cognitive core. Wires a [`Clock`], the classifier, and an
/// exclusively-owned [`ActivityLog`] behind the [`Engine`] boundary.
pub struct CognitiveCore {
    clock: Box<dyn Clock>,
    log: ActivityLog,
    state: Mutex<EngineState>,
    config: CoreConfig,
}

impl CognitiveCore {
    pub fn new(clock: Box<dyn Clock>, log: ActivityLog, config: CoreConfig) -> Self {
        Self {
            clock,
            log,
            state: Mutex::new(EngineState::default()),
            config,
        }
    }

    /// Snapshot of the activity log, oldest entry first.
    pub fn activity(&self) -> Vec<String> {
        self.log.snapshot()
    }

    pub fn introspection_level(&self) -> u8 {
        self.config.introspection_level
    }
}

#[async_trait]
impl Engine for CognitiveCore {
    async fn load(&self) {
        let now = self.clock.now();
        {
            let mut state = self.state.lock().unwrap();
            state.loaded = true;
            state.last_query = Some(now);
        }
        let entry = format!(
            "Cognitive Engine Core loaded successfully at {}",
            now.format(TIMESTAMP_FORMAT)
        );
        self.log.append(entry.as_str());
        info!("{entry}");
    }

    async fn process(&self, query: &str) -> Result<String, EngineError> {
        let now = self.clock.now();
        {
            let mut state = self.state.lock().unwrap();
            if !state.loaded {
                return Err(EngineError::NotLoaded);
            }
            state.last_query = Some(now);
        }
        self.log.append(format!("Processed query: {query}"));

        let classification = classifier::classify(query);
        debug!(
            sentiment = %classification.sentiment,
            deep = classification.deep_processing,
            "query classified"
        );

        let response = classification.response_for(query);
        self.log.append(response.as_str());
        Ok(response)
    }

    async fn introspect(&self) -> String {
        let last_query = self.state.lock().unwrap().last_query;

        let mut report = String::from("System Introspection Report: ");
        match last_query {
            Some(at) => {
                report.push_str(&format!(
                    "Last query processed at {}. ",
                    at.format(TIMESTAMP_FORMAT)
                ));
            }
            None => report.push_str("No queries processed yet. "),
        }
        report.push_str(&format!(
            "Introspection level: {}.",
            self.config.introspection_level
        ));
        report
    }

    async fn reload(&self) {
        self.state.lock().unwrap().loaded = false;
        self.log.append("Reloading...");
        info!(
            delay_ms = self.config.reload_delay.as_millis() as u64,
            "engine core reloading"
        );
        // Simulated module re-acquisition. The state lock is not held
        // across the wait, so status() observes the unloaded phase.
        tokio::time::sleep(self.config.reload_delay).await;
        self.load().await;
    }

    fn status(&self) -> bool {
        self.state.lock().unwrap().loaded
    }
}
