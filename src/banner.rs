//! Startup banner and session summary display.

use std::time::Duration;

/// Session configuration for display in the startup banner.
pub struct BannerInfo {
    pub introspection_level: u8,
    pub reload_delay: Duration,
    pub max_in_flight: usize,
}

/// Print the startup banner with session info.
pub fn print_banner(info: &BannerInfo) {
    println!(
        r#"
   ╔═══════════════════════════════════════╗
   ║             A U R O R A               ║
   ║     a small mind with a big diary     ║
   ╚═══════════════════════════════════════╝

   version        {}
   introspection  level {}
   reload delay   {} ms
   workers        {} queries in flight, max
"#,
        env!("CARGO_PKG_VERSION"),
        info.introspection_level,
        info.reload_delay.as_millis(),
        info.max_in_flight,
    );
}

/// Print the session summary (query count + farewell).
pub fn print_session_summary(queries_answered: u64, log_entries: usize) {
    if queries_answered > 0 {
        println!(
            "session: {queries_answered} queries answered, {log_entries} log entries"
        );
    }
    println!("goodbye.");
}
