//! Project-wide constants.

use std::time::Duration;

/// Timestamp format used in log entries and introspection reports.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Introspection level the core reports when none is configured.
pub const DEFAULT_INTROSPECTION_LEVEL: u8 = 1;

/// Pause between reload's unload and load phases.
pub const DEFAULT_RELOAD_DELAY: Duration = Duration::from_millis(500);

/// Cap on queries executing concurrently in the dispatcher.
pub const DEFAULT_MAX_IN_FLIGHT: usize = 8;
