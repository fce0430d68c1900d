use std::sync::Arc;
use std::time::Duration;

use chrono::{Local, TimeZone};

use aurora::activity::ActivityLog;
use aurora::clock::FixedClock;
use aurora::engine::core::{CognitiveCore, CoreConfig};
use aurora::engine::{Engine, EngineError};

/// A core pinned to 2024-05-01 12:00:00 local time.
fn build_core(reload_delay: Duration) -> Arc<CognitiveCore> {
    let at = Local.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
    Arc::new(CognitiveCore::new(
        Box::new(FixedClock::new(at)),
        ActivityLog::new(),
        CoreConfig {
            introspection_level: 1,
            reload_delay,
        },
    ))
}

fn quick_core() -> Arc<CognitiveCore> {
    build_core(Duration::from_millis(10))
}

#[tokio::test]
async fn status_is_false_until_load() {
    let core = quick_core();
    assert!(!core.status());

    core.load().await;
    assert!(core.status());
}

#[tokio::test]
async fn load_appends_one_entry_with_timestamp() {
    let core = quick_core();
    core.load().await;

    let log = core.activity();
    assert_eq!(log.len(), 1);
    assert_eq!(
        log[0],
        "Cognitive Engine Core loaded successfully at 2024-05-01 12:00:00"
    );
}

#[tokio::test]
async fn load_is_idempotent() {
    let core = quick_core();
    core.load().await;
    core.load().await;

    assert!(core.status());
    // Each load still announces itself.
    assert_eq!(core.activity().len(), 2);
}

#[tokio::test]
async fn process_before_load_fails() {
    let core = quick_core();
    let result = core.process("anything").await;
    assert_eq!(result, Err(EngineError::NotLoaded));
    // A refused query leaves no trace in the log.
    assert!(core.activity().is_empty());
}

#[tokio::test]
async fn happy_query_scenario() {
    let core = quick_core();
    core.load().await;

    let response = core.process("I am very happy today!").await.unwrap();
    assert_eq!(
        response,
        "Query: 'I am very happy today!' processed. \
         Detected sentiment: positive. Standard processing applied."
    );
}

#[tokio::test]
async fn synergy_query_scenario() {
    let core = quick_core();
    core.load().await;

    let response = core
        .process("Testing synergy in deep processing.")
        .await
        .unwrap();
    assert_eq!(
        response,
        "Query: 'Testing synergy in deep processing.' processed. \
         Detected sentiment: neutral. Deep cognitive processing triggered."
    );
}

#[tokio::test]
async fn process_appends_query_then_response() {
    let core = quick_core();
    core.load().await;

    let response = core.process("hello there").await.unwrap();

    let log = core.activity();
    assert_eq!(log.len(), 3); // load + query + response
    assert_eq!(log[1], "Processed query: hello there");
    assert_eq!(log[2], response);
}

#[tokio::test]
async fn introspect_before_any_activity() {
    let core = quick_core();
    assert_eq!(
        core.introspect().await,
        "System Introspection Report: No queries processed yet. Introspection level: 1."
    );
}

#[tokio::test]
async fn introspect_after_load_reports_timestamp() {
    let core = quick_core();
    core.load().await;

    assert_eq!(
        core.introspect().await,
        "System Introspection Report: Last query processed at 2024-05-01 12:00:00. \
         Introspection level: 1."
    );
}

#[tokio::test]
async fn introspect_is_read_only() {
    let core = quick_core();
    core.load().await;

    let entries_before = core.activity().len();
    let first = core.introspect().await;
    let second = core.introspect().await;

    assert_eq!(first, second);
    assert_eq!(core.activity().len(), entries_before);
}

#[tokio::test]
async fn introspection_level_is_configurable() {
    let at = Local.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
    let core = CognitiveCore::new(
        Box::new(FixedClock::new(at)),
        ActivityLog::new(),
        CoreConfig {
            introspection_level: 3,
            reload_delay: Duration::from_millis(10),
        },
    );

    assert!(core.introspect().await.ends_with("Introspection level: 3."));
}

#[tokio::test]
async fn reload_appends_announcement_then_load_entry() {
    let core = quick_core();
    core.load().await;

    core.reload().await;

    let log = core.activity();
    assert_eq!(log.len(), 3); // load + reloading + nested load
    assert_eq!(log[1], "Reloading...");
    assert_eq!(
        log[2],
        "Cognitive Engine Core loaded successfully at 2024-05-01 12:00:00"
    );
    assert!(core.status());
}

#[tokio::test]
async fn reload_passes_through_unloaded_and_waits_out_the_delay() {
    let core = build_core(Duration::from_millis(150));
    core.load().await;

    let started = std::time::Instant::now();
    let reloading = {
        let core = Arc::clone(&core);
        tokio::spawn(async move { core.reload().await })
    };

    // Sample the first phase well inside the delay window.
    tokio::time::sleep(Duration::from_millis(40)).await;
    assert!(!core.status(), "core should be unloaded mid-reload");

    reloading.await.unwrap();
    assert!(core.status());
    assert!(started.elapsed() >= Duration::from_millis(150));
}
