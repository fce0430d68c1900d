//! Time sources. The engine never reads the wall clock directly.

use chrono::{DateTime, Local};

use crate::consts::TIMESTAMP_FORMAT;

/// Supplies the current instant. Hand the engine a [`SystemClock`] for
/// real runs, a [`FixedClock`] for deterministic tests.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Local>;

    /// The current instant rendered the way log entries expect it.
    fn timestamp(&self) -> String {
        self.now().format(TIMESTAMP_FORMAT).to_string()
    }
}

/// Wall-clock time.
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}

/// A clock pinned to a single instant. A stopped watch, for tests.
pub struct FixedClock {
    at: DateTime<Local>,
}

impl FixedClock {
    pub fn new(at: DateTime<Local>) -> Self {
        Self { at }
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Local> {
        self.at
    }
}
