//! Selected-item tracking for the lookup.

use std::sync::Arc;

use log::debug;

/// Selection mode for a lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SelectionMode {
    /// At most one selected item.
    #[default]
    Single,
    /// Any number of distinct items.
    Multiple,
}

impl SelectionMode {
    /// Mode for a `multiple` config flag.
    pub fn from_multiple(multiple: bool) -> Self {
        if multiple { Self::Multiple } else { Self::Single }
    }
}

/// A change to the selected items.
///
/// `result` is the full selection after the change, so subscribers can
/// treat each notification as the authoritative state.
#[derive(Debug)]
pub struct SelectionChange<C> {
    /// Items added by this change.
    pub added: Vec<Arc<C>>,
    /// Items removed by this change.
    pub removed: Vec<Arc<C>>,
    /// All selected items after the change.
    pub result: Vec<Arc<C>>,
}

impl<C> Clone for SelectionChange<C> {
    fn clone(&self) -> Self {
        Self {
            added: self.added.clone(),
            removed: self.removed.clone(),
            result: self.result.clone(),
        }
    }
}

impl<C> SelectionChange<C> {
    /// Check if the change neither added nor removed anything.
    pub fn is_empty(&self) -> bool {
        self.added.is_empty() && self.removed.is_empty()
    }
}

/// Ordered set of selected candidates, compared by identity.
///
/// In single mode it holds at most one item; in multiple mode it never
/// holds the same `Arc` twice. Every mutation that changes the set returns
/// a [`SelectionChange`].
#[derive(Debug)]
pub struct SelectionSet<C> {
    mode: SelectionMode,
    items: Vec<Arc<C>>,
}

impl<C> SelectionSet<C> {
    /// Create an empty selection.
    pub fn new(mode: SelectionMode) -> Self {
        Self {
            mode,
            items: Vec::new(),
        }
    }

    /// Create a selection seeded with `items`.
    ///
    /// Duplicates are dropped, and single mode keeps only the first item.
    pub fn with_items(mode: SelectionMode, items: impl IntoIterator<Item = Arc<C>>) -> Self {
        let mut set = Self::new(mode);
        for item in items {
            if mode == SelectionMode::Single && !set.items.is_empty() {
                break;
            }
            if !set.contains(&item) {
                set.items.push(item);
            }
        }
        set
    }

    /// The selection mode.
    pub fn mode(&self) -> SelectionMode {
        self.mode
    }

    /// Selected items in selection order.
    pub fn items(&self) -> &[Arc<C>] {
        &self.items
    }

    /// The first selected item (the only one in single mode).
    pub fn first(&self) -> Option<&Arc<C>> {
        self.items.first()
    }

    /// Number of selected items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if nothing is selected.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Check if `item` is selected.
    pub fn contains(&self, item: &Arc<C>) -> bool {
        self.items.iter().any(|s| Arc::ptr_eq(s, item))
    }

    fn change(&self, added: Vec<Arc<C>>, removed: Vec<Arc<C>>) -> SelectionChange<C> {
        debug!(
            "Selection changed: +{} -{} = {}",
            added.len(),
            removed.len(),
            self.items.len()
        );
        SelectionChange {
            added,
            removed,
            result: self.items.clone(),
        }
    }

    /// Select `item`.
    ///
    /// Multiple mode appends it unless already selected (then nothing
    /// changes). Single mode always replaces the current selection, even
    /// with the same item, and always reports a change.
    pub fn select(&mut self, item: Arc<C>) -> Option<SelectionChange<C>> {
        match self.mode {
            SelectionMode::Multiple => {
                if self.contains(&item) {
                    return None;
                }
                self.items.push(Arc::clone(&item));
                Some(self.change(vec![item], Vec::new()))
            }
            SelectionMode::Single => {
                let removed = std::mem::take(&mut self.items);
                self.items.push(Arc::clone(&item));
                Some(self.change(vec![item], removed))
            }
        }
    }

    /// Deselect `item` if it is selected.
    pub fn remove(&mut self, item: &Arc<C>) -> Option<SelectionChange<C>> {
        let index = self.items.iter().position(|s| Arc::ptr_eq(s, item))?;
        let removed = self.items.remove(index);
        Some(self.change(Vec::new(), vec![removed]))
    }

    /// Deselect the most recently added item.
    pub fn remove_last(&mut self) -> Option<SelectionChange<C>> {
        let removed = self.items.pop()?;
        Some(self.change(Vec::new(), vec![removed]))
    }

    /// Deselect everything. Nothing is reported if the set was already empty.
    pub fn clear_all(&mut self) -> Option<SelectionChange<C>> {
        if self.items.is_empty() {
            return None;
        }
        Some(self.take_all())
    }

    /// Deselect everything and always report, even an empty-to-empty change.
    pub fn take_all(&mut self) -> SelectionChange<C> {
        let removed = std::mem::take(&mut self.items);
        self.change(Vec::new(), removed)
    }
}
