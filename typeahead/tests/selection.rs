use std::sync::Arc;

use serde_json::{Value, json};
use typeahead::widgets::lookup::{SelectionMode, SelectionSet};

fn item(name: &str) -> Arc<Value> {
    Arc::new(json!({ "name": name }))
}

#[test]
fn test_multiple_select_appends() {
    let apple = item("Apple");
    let banana = item("Banana");
    let mut set = SelectionSet::new(SelectionMode::Multiple);

    set.select(Arc::clone(&apple)).unwrap();
    let change = set.select(Arc::clone(&banana)).unwrap();

    assert_eq!(change.added.len(), 1);
    assert!(Arc::ptr_eq(&change.added[0], &banana));
    assert!(change.removed.is_empty());
    assert_eq!(change.result.len(), 2);
}

#[test]
fn test_multiple_select_existing_is_noop() {
    let apple = item("Apple");
    let mut set = SelectionSet::new(SelectionMode::Multiple);
    set.select(Arc::clone(&apple));

    assert!(set.select(Arc::clone(&apple)).is_none());
    assert_eq!(set.len(), 1);
}

#[test]
fn test_multiple_equal_values_are_distinct() {
    let first = item("Apple");
    let second = item("Apple");
    let mut set = SelectionSet::new(SelectionMode::Multiple);
    set.select(first);

    assert!(set.select(second).is_some());
    assert_eq!(set.len(), 2);
}

#[test]
fn test_single_select_replaces() {
    let apple = item("Apple");
    let banana = item("Banana");
    let mut set = SelectionSet::new(SelectionMode::Single);
    set.select(Arc::clone(&apple));

    let change = set.select(Arc::clone(&banana)).unwrap();
    assert!(Arc::ptr_eq(&change.added[0], &banana));
    assert_eq!(change.removed.len(), 1);
    assert!(Arc::ptr_eq(&change.removed[0], &apple));
    assert_eq!(set.len(), 1);
}

#[test]
fn test_single_reselect_still_reports() {
    let apple = item("Apple");
    let mut set = SelectionSet::new(SelectionMode::Single);
    set.select(Arc::clone(&apple));

    let change = set.select(Arc::clone(&apple)).unwrap();
    assert_eq!(change.added.len(), 1);
    assert_eq!(change.removed.len(), 1);
    assert_eq!(change.result.len(), 1);
}

#[test]
fn test_remove_by_identity() {
    let apple = item("Apple");
    let lookalike = item("Apple");
    let mut set = SelectionSet::with_items(SelectionMode::Multiple, [Arc::clone(&apple)]);

    assert!(set.remove(&lookalike).is_none());
    let change = set.remove(&apple).unwrap();
    assert!(Arc::ptr_eq(&change.removed[0], &apple));
    assert!(change.result.is_empty());
}

#[test]
fn test_remove_last_shrinks_by_one() {
    let mut set = SelectionSet::with_items(
        SelectionMode::Multiple,
        [item("Apple"), item("Banana"), item("Grape")],
    );

    for expected in (0..3).rev() {
        let change = set.remove_last().unwrap();
        assert_eq!(change.removed.len(), 1);
        assert_eq!(set.len(), expected);
        assert_eq!(change.result.len(), expected);
    }
    assert!(set.remove_last().is_none());
    assert_eq!(set.len(), 0);
}

#[test]
fn test_clear_all_empty_is_silent() {
    let mut set: SelectionSet<Value> = SelectionSet::new(SelectionMode::Multiple);
    assert!(set.clear_all().is_none());
}

#[test]
fn test_clear_all_reports_everything() {
    let mut set = SelectionSet::with_items(SelectionMode::Multiple, [item("Apple"), item("Banana")]);
    let change = set.clear_all().unwrap();
    assert_eq!(change.removed.len(), 2);
    assert!(change.result.is_empty());
    assert!(set.is_empty());
}

#[test]
fn test_take_all_reports_even_when_empty() {
    let mut set: SelectionSet<Value> = SelectionSet::new(SelectionMode::Single);
    let change = set.take_all();
    assert!(change.is_empty());
    assert!(change.result.is_empty());
}

#[test]
fn test_seed_single_keeps_first() {
    let apple = item("Apple");
    let set = SelectionSet::with_items(SelectionMode::Single, [Arc::clone(&apple), item("Banana")]);
    assert_eq!(set.len(), 1);
    assert!(set.contains(&apple));
}

#[test]
fn test_seed_multiple_drops_duplicates() {
    let apple = item("Apple");
    let set = SelectionSet::with_items(
        SelectionMode::Multiple,
        [Arc::clone(&apple), item("Banana"), Arc::clone(&apple)],
    );
    assert_eq!(set.len(), 2);
}
