//! Lookup widget state.

use std::fmt;
use std::sync::Arc;
use std::time::Instant;

use log::{debug, trace};

use crate::config::LookupConfig;
use crate::dropdown::{DropdownAdapter, NoopDropdown};
use crate::error::ConfigError;
use crate::ids::IdGenerator;
use crate::resources::{DefaultResources, Resources, SEARCH_PLACEHOLDER};

use super::filter::{FilterOptions, filter_candidates};
use super::{Candidate, Debouncer, Menu, SelectionChange, SelectionMode, SelectionSet};

/// Identifier for a Lookup widget instance.
///
/// Also used as the anchor passed to the dropdown collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LookupId(String);

impl LookupId {
    /// Create an id from a caller-supplied string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Draw a fresh id from a generator.
    pub fn generate(ids: &mut dyn IdGenerator) -> Self {
        Self(ids.next_id("lookup"))
    }

    /// The id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for LookupId {
    fn default() -> Self {
        Self::new("lookup")
    }
}

impl fmt::Display for LookupId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Where the lookup is in its interaction cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InteractionState {
    /// Nothing pending and the menu is closed.
    Idle,
    /// A debounced search is pending.
    Typing,
    /// The results menu is open.
    MenuOpen,
}

type ChangeCallback<C> = Box<dyn FnMut(&SelectionChange<C>)>;

/// A type-ahead search input with a results menu and single or multiple
/// selection.
///
/// The lookup owns its search text, its selection and the open/closed
/// state of its menu. The host feeds it events through the named handlers
/// (`on_key`, `on_blur`, `on_outside_click`, ...) and collects selection
/// changes with [`take_changes`](Self::take_changes).
///
/// Searches are debounced. A synchronous host calls [`tick`](Self::tick)
/// from its loop, waking at [`next_deadline`](Self::next_deadline); a tokio
/// host can use [`wait_for_search`](super::wait_for_search).
///
/// # Example
///
/// ```ignore
/// let data: Vec<Arc<Value>> = vec![
///     Arc::new(json!({"name": "Apple"})),
///     Arc::new(json!({"name": "Banana"})),
/// ];
/// let mut lookup = Lookup::new(LookupConfig::default(), data);
///
/// lookup.set_search_text("ban", Instant::now());
/// lookup.search_now();
/// lookup.on_key(&KeyCombo::key(Key::Enter), Instant::now());
///
/// for change in lookup.take_changes() {
///     println!("selected {} item(s)", change.result.len());
/// }
/// ```
pub struct Lookup<C> {
    id: LookupId,
    config: LookupConfig,
    data: Vec<Arc<C>>,
    selection: SelectionSet<C>,

    /// Current search text
    search_text: String,
    /// Cursor position in the search text (byte offset)
    text_cursor: usize,
    focused: bool,

    debouncer: Debouncer,
    menu: Menu<C>,

    dropdown: Box<dyn DropdownAdapter>,
    resources: Box<dyn Resources>,

    /// Changes not yet collected by the host
    changes: Vec<SelectionChange<C>>,
    on_change: Option<ChangeCallback<C>>,
    destroyed: bool,
}

impl<C> fmt::Debug for Lookup<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Lookup")
            .field("id", &self.id)
            .field("config", &self.config)
            .field("candidates", &self.data.len())
            .field("selected", &self.selection.len())
            .field("search_text", &self.search_text)
            .field("focused", &self.focused)
            .field("open", &self.menu.is_open())
            .field("search_pending", &self.debouncer.is_pending())
            .finish_non_exhaustive()
    }
}

impl<C> Lookup<C> {
    /// Create a lookup over `data`.
    ///
    /// The config is used as given; inconsistent settings degrade to empty
    /// matches rather than errors. Use [`try_new`](Self::try_new) to reject
    /// them up front.
    pub fn new(config: LookupConfig, data: impl IntoIterator<Item = Arc<C>>) -> Self {
        let mode = SelectionMode::from_multiple(config.multiple);
        Self {
            id: LookupId::default(),
            config,
            data: data.into_iter().collect(),
            selection: SelectionSet::new(mode),
            search_text: String::new(),
            text_cursor: 0,
            focused: false,
            debouncer: Debouncer::new(),
            menu: Menu::new(),
            dropdown: Box::new(NoopDropdown),
            resources: Box::new(DefaultResources),
            changes: Vec::new(),
            on_change: None,
            destroyed: false,
        }
    }

    /// Create a lookup after validating `config`.
    pub fn try_new(
        config: LookupConfig,
        data: impl IntoIterator<Item = Arc<C>>,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::new(config, data))
    }

    /// Set the instance id.
    pub fn with_id(mut self, id: LookupId) -> Self {
        self.id = id;
        self
    }

    /// Seed the initial selection. No change is reported for it.
    pub fn with_selected(mut self, items: impl IntoIterator<Item = Arc<C>>) -> Self {
        self.selection = SelectionSet::with_items(self.selection.mode(), items);
        self
    }

    /// Set the dropdown visibility collaborator.
    pub fn with_dropdown(mut self, dropdown: impl DropdownAdapter + 'static) -> Self {
        self.dropdown = Box::new(dropdown);
        self
    }

    /// Set the localized string source.
    pub fn with_resources(mut self, resources: impl Resources + 'static) -> Self {
        self.resources = Box::new(resources);
        self
    }

    /// Call `callback` for every selection change, in addition to queueing it.
    pub fn on_selection_change(
        mut self,
        callback: impl FnMut(&SelectionChange<C>) + 'static,
    ) -> Self {
        self.on_change = Some(Box::new(callback));
        self
    }

    // -------------------------------------------------------------------------
    // Read methods
    // -------------------------------------------------------------------------

    /// Get the instance id.
    pub fn id(&self) -> &LookupId {
        &self.id
    }

    /// Get the configuration.
    pub fn config(&self) -> &LookupConfig {
        &self.config
    }

    /// All candidates.
    pub fn data(&self) -> &[Arc<C>] {
        &self.data
    }

    /// Selected candidates in selection order.
    pub fn selected(&self) -> &[Arc<C>] {
        self.selection.items()
    }

    /// Get the current search text.
    pub fn search_text(&self) -> &str {
        &self.search_text
    }

    /// Get the text cursor position (byte offset).
    pub fn text_cursor(&self) -> usize {
        self.text_cursor
    }

    /// Results currently shown in the menu.
    pub fn results(&self) -> &[Arc<C>] {
        self.menu.results()
    }

    /// The highlighted result.
    pub fn active_item(&self) -> Option<&Arc<C>> {
        self.menu.active()
    }

    /// Check if the results menu is open.
    pub fn is_open(&self) -> bool {
        self.menu.is_open()
    }

    /// Check if the search input has focus.
    pub fn is_focused(&self) -> bool {
        self.focused
    }

    /// Check if a debounced search is pending.
    pub fn is_search_pending(&self) -> bool {
        self.debouncer.is_pending()
    }

    /// When the pending search is due.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.debouncer.deadline()
    }

    /// Where the lookup is in its interaction cycle.
    pub fn interaction_state(&self) -> InteractionState {
        if self.debouncer.is_pending() {
            InteractionState::Typing
        } else if self.menu.is_open() {
            InteractionState::MenuOpen
        } else {
            InteractionState::Idle
        }
    }

    /// Placeholder for the search input.
    pub fn placeholder_text(&self) -> String {
        match &self.config.placeholder_text {
            Some(text) => text.clone(),
            None => self
                .resources
                .get_string(SEARCH_PLACEHOLDER)
                .unwrap_or_default(),
        }
    }

    /// Collect the selection changes reported since the last call.
    pub fn take_changes(&mut self) -> Vec<SelectionChange<C>> {
        std::mem::take(&mut self.changes)
    }

    // -------------------------------------------------------------------------
    // Write methods
    // -------------------------------------------------------------------------

    /// Replace the candidates. Selection, text and menu are left alone.
    pub fn set_data(&mut self, data: impl IntoIterator<Item = Arc<C>>) {
        self.data = data.into_iter().collect();
        debug!("Lookup {} now has {} candidates", self.id, self.data.len());
    }

    /// Mirror the host input's text without scheduling a search.
    pub fn sync_search_text(&mut self, text: impl Into<String>) {
        self.set_text(text.into());
    }

    /// Mirror the host input's text and schedule a search.
    pub fn set_search_text(&mut self, text: impl Into<String>, now: Instant) {
        self.set_text(text.into());
        self.queue_search(now);
    }

    /// Close the results menu, cancelling any pending search.
    pub fn close_menu(&mut self) {
        self.debouncer.cancel();
        self.menu.close(self.dropdown.as_mut(), self.id.as_str());
    }

    /// Tear the lookup down. Any pending search is cancelled and no later
    /// search will run.
    pub fn destroy(&mut self) {
        if !self.destroyed {
            debug!("Lookup {} destroyed", self.id);
            self.close_menu();
            self.destroyed = true;
        }
    }

    /// Mark the search input as focused.
    pub fn on_focus(&mut self) {
        self.focused = true;
    }

    /// Highlight a result, e.g. on mouse hover.
    pub fn set_active_item(&mut self, item: &Arc<C>) {
        self.menu.set_active(item);
    }

    /// Deselect `item` (e.g. from a token's remove button).
    pub fn remove_selected_item(&mut self, item: &Arc<C>) {
        if let Some(change) = self.selection.remove(item) {
            self.notify(change);
        }
    }

    pub(super) fn is_multiple(&self) -> bool {
        self.selection.mode() == SelectionMode::Multiple
    }

    pub(super) fn queue_search(&mut self, now: Instant) {
        if self.destroyed {
            return;
        }
        let deadline = self.debouncer.schedule(self.config.delay(), now);
        trace!("Lookup {} search queued for {:?}", self.id, deadline);
    }

    pub(super) fn notify(&mut self, change: SelectionChange<C>) {
        if let Some(callback) = self.on_change.as_mut() {
            callback(&change);
        }
        self.changes.push(change);
    }

    /// Empty or whitespace-only text counts as no search.
    pub(super) fn is_search_text_empty(&self) -> bool {
        self.search_text.trim().is_empty()
    }

    pub(super) fn menu_mut(&mut self) -> &mut Menu<C> {
        &mut self.menu
    }

    pub(super) fn selection_mut(&mut self) -> &mut SelectionSet<C> {
        &mut self.selection
    }

    // -------------------------------------------------------------------------
    // Text editing
    // -------------------------------------------------------------------------

    fn set_text(&mut self, text: String) {
        self.search_text = text;
        self.text_cursor = self.search_text.len();
    }

    /// Insert a character at the cursor position.
    pub(super) fn insert_char(&mut self, c: char) {
        self.search_text.insert(self.text_cursor, c);
        self.text_cursor += c.len_utf8();
    }

    /// Delete the character before the cursor.
    pub(super) fn delete_char_before(&mut self) {
        if self.text_cursor == 0 {
            return;
        }
        let prev = self.search_text[..self.text_cursor]
            .char_indices()
            .last()
            .map(|(i, _)| i)
            .unwrap_or(0);
        self.search_text.remove(prev);
        self.text_cursor = prev;
    }

    /// Delete the character at the cursor.
    pub(super) fn delete_char_at(&mut self) {
        if self.text_cursor < self.search_text.len() {
            self.search_text.remove(self.text_cursor);
        }
    }

    pub(super) fn text_cursor_left(&mut self) {
        if self.text_cursor > 0 {
            self.text_cursor = self.search_text[..self.text_cursor]
                .char_indices()
                .last()
                .map(|(i, _)| i)
                .unwrap_or(0);
        }
    }

    pub(super) fn text_cursor_right(&mut self) {
        if let Some(c) = self.search_text[self.text_cursor..].chars().next() {
            self.text_cursor += c.len_utf8();
        }
    }

    pub(super) fn text_cursor_home(&mut self) {
        self.text_cursor = 0;
    }

    pub(super) fn text_cursor_end(&mut self) {
        self.text_cursor = self.search_text.len();
    }
}

impl<C: Candidate> Lookup<C> {
    /// Run the pending search if its delay has elapsed by `now`.
    ///
    /// Returns true if a search ran.
    pub fn tick(&mut self, now: Instant) -> bool {
        if self.destroyed {
            return false;
        }
        if self.debouncer.poll(now) {
            self.search_now();
            true
        } else {
            false
        }
    }

    /// Search immediately, skipping the debounce delay.
    ///
    /// Opens the menu when the text is long enough and is not simply the
    /// current selection's text; otherwise closes it.
    pub fn search_now(&mut self) {
        self.debouncer.cancel();
        if self.destroyed {
            return;
        }
        if self.is_searchable() {
            let results = self.search_results();
            debug!(
                "Lookup {} search {:?} matched {} candidates",
                self.id,
                self.search_text,
                results.len()
            );
            self.menu
                .open(results, self.dropdown.as_mut(), self.id.as_str());
        } else {
            self.close_menu();
        }
    }

    /// Commit `item` as selected and close the menu.
    ///
    /// Single mode replaces the selection and shows the item's descriptor
    /// text; multiple mode adds it (if new) and clears the text.
    pub fn select_item(&mut self, item: &Arc<C>) {
        debug!("Lookup {} committing selection", self.id);
        let change = self.selection.select(Arc::clone(item));
        if self.is_multiple() {
            self.set_text(String::new());
        } else {
            let text = self.descriptor_text(item);
            self.set_text(text);
        }
        if let Some(change) = change {
            self.notify(change);
        }
        self.close_menu();
    }

    /// A result was clicked in the menu.
    pub fn on_item_click(&mut self, item: &Arc<C>) {
        self.select_item(item);
    }

    /// Empty the search text. Single mode also clears the selection.
    ///
    /// In single mode this always reports a change, even when nothing was
    /// selected.
    pub fn clear_search_text(&mut self) {
        self.set_text(String::new());
        if !self.is_multiple() {
            let change = self.selection.take_all();
            self.notify(change);
        }
    }

    /// The search input lost focus.
    pub fn on_blur(&mut self) {
        self.focused = false;
        self.resolve_partial_search();
    }

    /// A click landed outside the lookup.
    pub fn on_outside_click(&mut self) {
        if self.focused || self.menu.is_open() {
            self.resolve_partial_search();
        }
        self.close_menu();
    }

    /// Commit the highlighted result, or else the first match of an
    /// immediate search. Closes the menu either way.
    pub(super) fn commit_active_or_search(&mut self) {
        if let Some(active) = self.menu.active().cloned() {
            self.select_item(&active);
            return;
        }
        self.debouncer.cancel();
        if self.is_searchable()
            && let Some(first) = self.search_results().first().cloned()
        {
            self.select_item(&first);
            return;
        }
        self.close_menu();
    }

    /// Put the text back to the current single selection, or empty it.
    pub(super) fn revert_selection(&mut self) {
        let text = match self.selection.first() {
            Some(item) if !self.is_multiple() => self.descriptor_text(item),
            _ => String::new(),
        };
        self.set_text(text);
    }

    /// Leave the input either empty or showing a committed selection.
    fn resolve_partial_search(&mut self) {
        if self.is_search_text_empty() {
            self.clear_search_text();
            return;
        }

        if self.is_multiple() || !self.is_search_text_matching_selected_item() {
            if let Some(active) = self.menu.active().cloned() {
                self.select_item(&active);
            } else if let Some(first) = self.search_results().first().cloned() {
                self.select_item(&first);
            } else {
                trace!("Lookup {} partial search matched nothing", self.id);
                self.clear_search_text();
            }
        }
    }

    fn is_searchable(&self) -> bool {
        !self.is_search_text_empty()
            && self.search_text.chars().count() >= self.config.min_chars
            && !self.is_search_text_matching_selected_item()
    }

    fn is_search_text_matching_selected_item(&self) -> bool {
        if self.is_multiple() {
            return false;
        }
        self.selection
            .first()
            .is_some_and(|item| self.descriptor_text(item) == self.search_text.trim())
    }

    fn descriptor_text(&self, item: &C) -> String {
        item.property_text(&self.config.descriptor_property)
    }

    fn search_results(&self) -> Vec<Arc<C>> {
        let query_lower = self.search_text.to_lowercase();
        let exclude: &[Arc<C>] = if self.is_multiple() {
            self.selection.items()
        } else {
            &[]
        };
        let options = FilterOptions::new(&self.config.searchable_properties)
            .excluding(exclude)
            .limit(self.config.effective_limit());
        filter_candidates(&self.data, &query_lower, &options)
    }
}

impl<C> Drop for Lookup<C> {
    fn drop(&mut self) {
        if self.menu.is_open() {
            self.close_menu();
        }
        self.destroy();
    }
}
