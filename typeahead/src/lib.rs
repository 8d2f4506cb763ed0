//! Headless controllers for a type-ahead lookup and a radio group.
//!
//! The controllers own interaction state (search text, debounce, results
//! menu, selection) and leave drawing, dropdown placement and translation
//! to the host through small collaborator traits.

pub mod config;
pub mod dropdown;
pub mod error;
pub mod ids;
pub mod input;
pub mod resources;
pub mod widgets;

pub mod prelude {
    pub use crate::config::LookupConfig;
    pub use crate::dropdown::{DropdownAdapter, DropdownSide, NoopDropdown};
    pub use crate::error::ConfigError;
    pub use crate::ids::{IdGenerator, SequentialIds, UuidIds};
    pub use crate::input::{Key, KeyCombo, Modifiers};
    pub use crate::resources::{DefaultResources, Resources};
    pub use crate::widgets::EventResult;
    pub use crate::widgets::lookup::{
        Candidate, InteractionState, Lookup, LookupId, SelectionChange, SelectionMode,
        wait_for_search,
    };
    pub use crate::widgets::radio::{RadioButton, RadioChange, RadioGroup};
}
