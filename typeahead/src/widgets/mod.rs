//! Widget controllers.

pub mod events;
pub mod lookup;
pub mod radio;

pub use events::EventResult;
