//! Dropdown visibility collaborator.
//!
//! The lookup decides *when* its results menu becomes visible; where and
//! how it is drawn belongs to the host.

/// Side of the anchor the dropdown should prefer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DropdownSide {
    /// Align with the anchor's left edge.
    #[default]
    Left,
    /// Align with the anchor's right edge.
    Right,
}

/// Shows and hides the results dropdown for an anchor widget.
pub trait DropdownAdapter {
    /// Make the dropdown for `anchor` visible.
    fn show(&mut self, anchor: &str, side: DropdownSide);

    /// Hide the dropdown for `anchor`.
    fn hide(&mut self, anchor: &str);
}

/// Adapter for hosts that render the menu straight from lookup state.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopDropdown;

impl DropdownAdapter for NoopDropdown {
    fn show(&mut self, _anchor: &str, _side: DropdownSide) {}

    fn hide(&mut self, _anchor: &str) {}
}
