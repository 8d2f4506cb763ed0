//! Key handling for the Lookup widget.

use std::time::Instant;

use log::trace;

use crate::input::{Key, KeyCombo};
use crate::widgets::events::EventResult;

use super::{Candidate, Lookup};

impl<C: Candidate> Lookup<C> {
    /// Handle a key press at time `now`.
    ///
    /// Keys that edit the text re-arm the search debounce. Escape, the
    /// arrow keys and Enter act on the menu instead. `Consumed` means the
    /// host should suppress its own handling of the key (e.g. scrolling on
    /// arrow keys).
    pub fn on_key(&mut self, key: &KeyCombo, now: Instant) -> EventResult {
        // Ignore keys with ctrl/alt modifiers
        if key.modifiers.ctrl || key.modifiers.alt {
            return EventResult::Ignored;
        }
        trace!("Lookup {} key {:?}", self.id(), key.key);

        match key.key {
            Key::Escape => {
                self.revert_selection();
                self.close_menu();
            }
            Key::Up => self.menu_mut().move_active_up(),
            Key::Down => self.menu_mut().move_active_down(),
            Key::Enter => self.commit_active_or_search(),
            Key::Backspace => {
                // Backspace on an empty multi-select input removes the last token
                if self.is_multiple()
                    && self.is_search_text_empty()
                    && let Some(change) = self.selection_mut().remove_last()
                {
                    self.notify(change);
                }
                self.delete_char_before();
                self.queue_search(now);
            }
            Key::Delete => {
                self.delete_char_at();
                self.queue_search(now);
            }
            Key::Char(c) => {
                self.insert_char(c);
                self.queue_search(now);
            }
            Key::Space => {
                self.insert_char(' ');
                self.queue_search(now);
            }
            Key::Left => self.text_cursor_left(),
            Key::Right => self.text_cursor_right(),
            Key::Home => self.text_cursor_home(),
            Key::End => self.text_cursor_end(),
            Key::Tab => return EventResult::Ignored,
        }
        EventResult::Consumed
    }
}
