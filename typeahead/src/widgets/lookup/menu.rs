//! Results menu state.

use std::sync::Arc;

use log::debug;

use crate::dropdown::{DropdownAdapter, DropdownSide};

/// Open/closed state of the results menu and its active (highlighted) item.
///
/// The active item is always absent or one of the current results.
#[derive(Debug)]
pub struct Menu<C> {
    open: bool,
    results: Vec<Arc<C>>,
    active: Option<Arc<C>>,
}

impl<C> Default for Menu<C> {
    fn default() -> Self {
        Self {
            open: false,
            results: Vec::new(),
            active: None,
        }
    }
}

impl<C> Menu<C> {
    /// Create a closed menu.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if the menu is open.
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Current results.
    pub fn results(&self) -> &[Arc<C>] {
        &self.results
    }

    /// The highlighted result, if any.
    pub fn active(&self) -> Option<&Arc<C>> {
        self.active.as_ref()
    }

    /// Index of the highlighted result within the results.
    pub fn active_index(&self) -> Option<usize> {
        let active = self.active.as_ref()?;
        self.results.iter().position(|r| Arc::ptr_eq(r, active))
    }

    /// Show `results`, opening the dropdown if it is not already visible.
    ///
    /// The first result becomes active.
    pub fn open(&mut self, results: Vec<Arc<C>>, dropdown: &mut dyn DropdownAdapter, anchor: &str) {
        if !self.open {
            debug!("Menu {} opening with {} results", anchor, results.len());
            dropdown.show(anchor, DropdownSide::Left);
            self.open = true;
        }
        self.active = results.first().cloned();
        self.results = results;
    }

    /// Close the menu and drop its results. Always asks the dropdown to hide.
    pub fn close(&mut self, dropdown: &mut dyn DropdownAdapter, anchor: &str) {
        if self.open {
            debug!("Menu {} closing", anchor);
        }
        dropdown.hide(anchor);
        self.open = false;
        self.active = None;
        self.results.clear();
    }

    /// Highlight the next result. Stops at the last one.
    pub fn move_active_down(&mut self) {
        if !self.open {
            return;
        }
        if let Some(index) = self.active_index()
            && let Some(next) = self.results.get(index + 1)
        {
            self.active = Some(Arc::clone(next));
        }
    }

    /// Highlight the previous result. Stops at the first one.
    pub fn move_active_up(&mut self) {
        if !self.open {
            return;
        }
        if let Some(index) = self.active_index()
            && index > 0
        {
            self.active = Some(Arc::clone(&self.results[index - 1]));
        }
    }

    /// Highlight a specific result (e.g. on hover). Ignored if it is not a result.
    pub fn set_active(&mut self, item: &Arc<C>) {
        if self.open && self.results.iter().any(|r| Arc::ptr_eq(r, item)) {
            self.active = Some(Arc::clone(item));
        }
    }
}
