//! Lookup widget - type-ahead search with single or multiple selection.

mod debounce;
mod driver;
mod events;
mod filter;
mod item;
mod menu;
mod selection;
mod state;

pub use debounce::Debouncer;
pub use driver::wait_for_search;
pub use filter::{FilterOptions, filter_candidates, is_search_match};
pub use item::Candidate;
pub use menu::Menu;
pub use selection::{SelectionChange, SelectionMode, SelectionSet};
pub use state::{InteractionState, Lookup, LookupId};
