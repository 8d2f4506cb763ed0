use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;

use serde_json::{Value, json};
use typeahead::dropdown::{DropdownAdapter, DropdownSide};
use typeahead::widgets::lookup::Menu;

#[derive(Debug, Clone, PartialEq)]
enum Call {
    Show(String, DropdownSide),
    Hide(String),
}

#[derive(Default, Clone)]
struct Recorder(Rc<RefCell<Vec<Call>>>);

impl DropdownAdapter for Recorder {
    fn show(&mut self, anchor: &str, side: DropdownSide) {
        self.0.borrow_mut().push(Call::Show(anchor.to_string(), side));
    }

    fn hide(&mut self, anchor: &str) {
        self.0.borrow_mut().push(Call::Hide(anchor.to_string()));
    }
}

fn results(names: &[&str]) -> Vec<Arc<Value>> {
    names.iter().map(|n| Arc::new(json!({ "name": n }))).collect()
}

fn active_name(menu: &Menu<Value>) -> Option<String> {
    menu.active().map(|a| a["name"].as_str().unwrap().to_string())
}

#[test]
fn test_open_activates_first_result() {
    let mut dropdown = Recorder::default();
    let mut menu = Menu::new();
    menu.open(results(&["Ann", "Anna"]), &mut dropdown, "lookup");

    assert!(menu.is_open());
    assert_eq!(active_name(&menu).as_deref(), Some("Ann"));
    assert_eq!(
        *dropdown.0.borrow(),
        vec![Call::Show("lookup".to_string(), DropdownSide::Left)]
    );
}

#[test]
fn test_open_with_no_results_has_no_active() {
    let mut dropdown = Recorder::default();
    let mut menu: Menu<Value> = Menu::new();
    menu.open(Vec::new(), &mut dropdown, "lookup");

    assert!(menu.is_open());
    assert!(menu.active().is_none());
}

#[test]
fn test_reopen_does_not_show_again() {
    let mut dropdown = Recorder::default();
    let mut menu = Menu::new();
    menu.open(results(&["Ann"]), &mut dropdown, "lookup");
    menu.open(results(&["Anna", "Annie"]), &mut dropdown, "lookup");

    assert_eq!(dropdown.0.borrow().len(), 1);
    assert_eq!(active_name(&menu).as_deref(), Some("Anna"));
}

#[test]
fn test_close_is_idempotent() {
    let mut dropdown = Recorder::default();
    let mut menu = Menu::new();
    menu.open(results(&["Ann"]), &mut dropdown, "lookup");
    menu.close(&mut dropdown, "lookup");
    dropdown.0.borrow_mut().clear();

    menu.close(&mut dropdown, "lookup");
    assert!(!menu.is_open());
    assert!(menu.active().is_none());
    assert_eq!(*dropdown.0.borrow(), vec![Call::Hide("lookup".to_string())]);
}

#[test]
fn test_navigation_stops_at_ends() {
    let mut dropdown = Recorder::default();
    let mut menu = Menu::new();
    menu.open(results(&["Ann", "Anna", "Annie"]), &mut dropdown, "lookup");

    menu.move_active_up();
    assert_eq!(active_name(&menu).as_deref(), Some("Ann"));

    menu.move_active_down();
    menu.move_active_down();
    assert_eq!(active_name(&menu).as_deref(), Some("Annie"));
    assert_eq!(menu.active_index(), Some(2));

    menu.move_active_down();
    assert_eq!(active_name(&menu).as_deref(), Some("Annie"));

    menu.move_active_up();
    assert_eq!(active_name(&menu).as_deref(), Some("Anna"));
}

#[test]
fn test_navigation_when_closed_is_noop() {
    let mut menu: Menu<Value> = Menu::new();
    menu.move_active_down();
    menu.move_active_up();
    assert!(menu.active().is_none());
}

#[test]
fn test_set_active_ignores_non_results() {
    let mut dropdown = Recorder::default();
    let mut menu = Menu::new();
    let shown = results(&["Ann", "Anna"]);
    menu.open(shown.clone(), &mut dropdown, "lookup");

    menu.set_active(&Arc::new(json!({ "name": "Anna" })));
    assert!(Arc::ptr_eq(menu.active().unwrap(), &shown[0]));

    menu.set_active(&shown[1]);
    assert!(Arc::ptr_eq(menu.active().unwrap(), &shown[1]));
}
