//! Key handling for the RadioGroup widget.

use crate::input::{Key, KeyCombo};
use crate::widgets::events::EventResult;

use super::RadioGroup;

impl<V: PartialEq + Clone> RadioGroup<V> {
    /// Handle a key press while the group has focus.
    ///
    /// Arrow keys move the selection with wrap-around, Home/End jump to the
    /// ends. Moving the selection activates the radio as a click would.
    pub fn on_key(&mut self, key: &KeyCombo) -> EventResult {
        // Only handle keys without modifiers
        if key.modifiers.any() {
            return EventResult::Ignored;
        }

        let len = self.len();
        if len == 0 {
            return EventResult::Ignored;
        }

        let target = match key.key {
            Key::Space | Key::Enter => self.selected().unwrap_or(0),
            Key::Up | Key::Left => match self.selected() {
                Some(0) | None => len - 1,
                Some(current) => current - 1,
            },
            Key::Down | Key::Right => match self.selected() {
                Some(current) if current + 1 < len => current + 1,
                _ => 0,
            },
            Key::Home => 0,
            Key::End => len - 1,
            _ => return EventResult::Ignored,
        };
        self.activate(target);
        EventResult::Consumed
    }
}
