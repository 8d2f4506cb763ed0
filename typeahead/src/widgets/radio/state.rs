//! Radio group widget state.

use std::fmt;

use log::debug;

use crate::ids::IdGenerator;

/// One radio option in a group.
#[derive(Debug, Clone, PartialEq)]
pub struct RadioButton<V> {
    value: V,
    name: String,
    checked: bool,
}

impl<V> RadioButton<V> {
    /// The value this radio stands for.
    pub fn value(&self) -> &V {
        &self.value
    }

    /// The group name shared by all radios in the group.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether this radio is checked.
    pub fn is_checked(&self) -> bool {
        self.checked
    }
}

/// Emitted when the user changes a group's selection.
#[derive(Debug, Clone, PartialEq)]
pub struct RadioChange<V> {
    /// Index of the radio that is now selected.
    pub index: Option<usize>,
    /// The group's value after the change.
    pub value: Option<V>,
}

type ValueCallback<V> = Box<dyn FnMut(Option<&V>)>;
type TouchedCallback = Box<dyn FnMut()>;

/// Controller for a group of mutually exclusive radios bound to a form value.
///
/// The group value and the checked radio are kept in step: setting the
/// value checks the radio with an equal value, and selecting a radio sets
/// the value. Change events are only emitted after
/// [`initialize`](Self::initialize), so applying the form's initial value
/// does not look like a user edit.
///
/// # Example
///
/// ```ignore
/// let mut ids = SequentialIds::new();
/// let mut theme = RadioGroup::new(&mut ids);
/// theme.set_radios(["light", "dark", "system"]);
/// theme.initialize(Some("system"));
///
/// theme.activate(1);
/// assert_eq!(theme.value(), Some(&"dark"));
/// ```
pub struct RadioGroup<V> {
    name: String,
    value: Option<V>,
    selected: Option<usize>,
    radios: Vec<RadioButton<V>>,
    initialized: bool,
    changes: Vec<RadioChange<V>>,
    on_change: Option<ValueCallback<V>>,
    on_touched: Option<TouchedCallback>,
}

impl<V: fmt::Debug> fmt::Debug for RadioGroup<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RadioGroup")
            .field("name", &self.name)
            .field("value", &self.value)
            .field("selected", &self.selected)
            .field("radios", &self.radios)
            .field("initialized", &self.initialized)
            .finish_non_exhaustive()
    }
}

impl<V: PartialEq + Clone> RadioGroup<V> {
    /// Create an empty group named from `ids`.
    pub fn new(ids: &mut dyn IdGenerator) -> Self {
        Self::with_name(ids.next_id("radio-group"))
    }

    /// Create an empty group with a caller-supplied name.
    pub fn with_name(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: None,
            selected: None,
            radios: Vec::new(),
            initialized: false,
            changes: Vec::new(),
            on_change: None,
            on_touched: None,
        }
    }

    // -------------------------------------------------------------------------
    // Read methods
    // -------------------------------------------------------------------------

    /// Get the group name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the group value.
    pub fn value(&self) -> Option<&V> {
        self.value.as_ref()
    }

    /// Get the selected radio index.
    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    /// All radios in the group.
    pub fn radios(&self) -> &[RadioButton<V>] {
        &self.radios
    }

    /// Get the number of radios
    pub fn len(&self) -> usize {
        self.radios.len()
    }

    /// Check if there are no radios
    pub fn is_empty(&self) -> bool {
        self.radios.is_empty()
    }

    /// Whether [`initialize`](Self::initialize) has run.
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Collect the change events emitted since the last call.
    pub fn take_changes(&mut self) -> Vec<RadioChange<V>> {
        std::mem::take(&mut self.changes)
    }

    // -------------------------------------------------------------------------
    // Write methods
    // -------------------------------------------------------------------------

    /// Rename the group and every radio in it.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
        for radio in &mut self.radios {
            radio.name.clone_from(&self.name);
        }
    }

    /// Add a radio and return its index.
    pub fn add_radio(&mut self, value: V) -> usize {
        self.radios.push(RadioButton {
            value,
            name: self.name.clone(),
            checked: false,
        });
        self.update_selected_radio_from_value();
        self.check_selected_radio();
        self.radios.len() - 1
    }

    /// Replace all radios.
    pub fn set_radios(&mut self, values: impl IntoIterator<Item = V>) {
        self.radios = values
            .into_iter()
            .map(|value| RadioButton {
                value,
                name: self.name.clone(),
                checked: false,
            })
            .collect();
        self.selected = None;
        self.update_selected_radio_from_value();
        self.check_selected_radio();
    }

    /// Set the group value. The radio with an equal value becomes checked.
    ///
    /// Setting the current value again does nothing.
    pub fn set_value(&mut self, value: Option<V>) {
        if self.value != value {
            self.value = value;
            self.update_selected_radio_from_value();
            self.check_selected_radio();
        }
    }

    /// Select a radio by index (or none) and take the group value from it.
    pub fn set_selected(&mut self, index: Option<usize>) {
        self.selected = index.filter(|&i| i < self.radios.len());
        let value = self.selected.map(|i| self.radios[i].value.clone());
        self.set_value(value);
        self.check_selected_radio();
    }

    /// Apply the form control's initial value and start emitting changes.
    pub fn initialize(&mut self, initial: Option<V>) {
        self.initialized = true;
        self.value = initial;
        self.update_selected_radio_from_value();
        self.check_selected_radio();
    }

    /// The user picked the radio at `index`.
    ///
    /// Selects it, emits a change, reports the new value to the form and
    /// marks the group touched. Picking the already-selected radio does
    /// nothing.
    pub fn activate(&mut self, index: usize) {
        if index >= self.radios.len() || self.selected == Some(index) {
            return;
        }
        debug!("Radio group {} activated radio {}", self.name, index);
        self.set_selected(Some(index));
        self.emit_change_event();
        if let Some(callback) = self.on_change.as_mut() {
            callback(self.value.as_ref());
        }
        self.touch();
    }

    /// Ensure the selected radio is the only checked one.
    pub fn check_selected_radio(&mut self) {
        for (index, radio) in self.radios.iter_mut().enumerate() {
            radio.checked = self.selected == Some(index);
        }
    }

    /// Emit a change event for the current selection, once initialized.
    pub fn emit_change_event(&mut self) {
        if self.initialized {
            self.changes.push(RadioChange {
                index: self.selected,
                value: self.value.clone(),
            });
        }
    }

    // -------------------------------------------------------------------------
    // Form control adapter
    // -------------------------------------------------------------------------

    /// Write a value coming from the form model.
    pub fn write_value(&mut self, value: Option<V>) {
        self.set_value(value);
    }

    /// Register the callback that reports user edits back to the form.
    pub fn register_on_change(&mut self, callback: impl FnMut(Option<&V>) + 'static) {
        self.on_change = Some(Box::new(callback));
    }

    /// Register the callback that marks the form control touched.
    pub fn register_on_touched(&mut self, callback: impl FnMut() + 'static) {
        self.on_touched = Some(Box::new(callback));
    }

    /// Mark the group as touched.
    pub fn touch(&mut self) {
        if let Some(callback) = self.on_touched.as_mut() {
            callback();
        }
    }

    fn update_selected_radio_from_value(&mut self) {
        let already_selected = self
            .selected
            .and_then(|i| self.radios.get(i))
            .is_some_and(|radio| Some(&radio.value) == self.value.as_ref());
        if already_selected {
            return;
        }

        self.selected = None;
        for (index, radio) in self.radios.iter_mut().enumerate() {
            radio.checked = self.value.as_ref() == Some(&radio.value);
            if radio.checked {
                self.selected = Some(index);
            }
        }
    }
}
