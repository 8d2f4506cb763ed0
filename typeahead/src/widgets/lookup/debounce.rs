//! Search debouncing.

use std::time::{Duration, Instant};

use log::trace;

/// One-shot, deadline-based debounce timer.
///
/// Each [`schedule`](Self::schedule) replaces the previous deadline, so a
/// burst of keystrokes collapses into a single trigger once the input has
/// been quiet for the delay. The host drives it by calling
/// [`poll`](Self::poll) with the current time, or by sleeping until
/// [`deadline`](Self::deadline).
#[derive(Debug, Clone, Default)]
pub struct Debouncer {
    deadline: Option<Instant>,
}

impl Debouncer {
    /// Create an idle debouncer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Arm the timer to fire `after` from `now`, replacing any pending one.
    pub fn schedule(&mut self, after: Duration, now: Instant) -> Instant {
        let deadline = now + after;
        if self.deadline.replace(deadline).is_some() {
            trace!("Debounce re-armed, previous deadline dropped");
        }
        deadline
    }

    /// Disarm the timer. Safe to call when nothing is pending.
    pub fn cancel(&mut self) {
        if self.deadline.take().is_some() {
            trace!("Debounce cancelled");
        }
    }

    /// Whether a trigger is pending.
    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    /// When the pending trigger is due.
    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Fire the trigger if it is due. Returns true at most once per schedule.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}
