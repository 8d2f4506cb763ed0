use std::sync::Arc;
use std::time::{Duration, Instant};

use serde_json::{Value, json};
use typeahead::config::LookupConfig;
use typeahead::widgets::lookup::{Lookup, wait_for_search};

fn lookup(delay: Duration) -> Lookup<Value> {
    let data = ["Apple", "Banana", "Grape"]
        .iter()
        .map(|n| Arc::new(json!({ "name": n })));
    Lookup::new(LookupConfig::new().search_delay(delay), data)
}

#[tokio::test]
async fn test_wait_runs_pending_search() {
    let mut lookup = lookup(Duration::from_millis(10));
    lookup.set_search_text("gr", Instant::now());

    assert!(wait_for_search(&mut lookup).await);
    assert!(lookup.is_open());
    assert_eq!(lookup.results().len(), 1);
    assert!(!lookup.is_search_pending());
}

#[tokio::test]
async fn test_wait_without_pending_search() {
    let mut lookup = lookup(Duration::from_millis(10));

    assert!(!wait_for_search(&mut lookup).await);
    assert!(!lookup.is_open());
}

#[tokio::test]
async fn test_wait_after_cancel() {
    let mut lookup = lookup(Duration::from_millis(10));
    lookup.set_search_text("gr", Instant::now());
    lookup.close_menu();

    assert!(!wait_for_search(&mut lookup).await);
    assert!(!lookup.is_open());
}

#[tokio::test]
async fn test_rearm_delays_search() {
    let mut lookup = lookup(Duration::from_millis(20));
    let start = Instant::now();
    lookup.set_search_text("b", start);
    lookup.set_search_text("ba", start + Duration::from_millis(15));

    assert!(wait_for_search(&mut lookup).await);
    assert!(start.elapsed() >= Duration::from_millis(35));
    assert_eq!(lookup.results()[0]["name"], "Banana");
}
