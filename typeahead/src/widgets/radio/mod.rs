//! RadioGroup widget - a group of mutually exclusive radio options.

mod events;
mod state;

pub use state::{RadioButton, RadioChange, RadioGroup};
