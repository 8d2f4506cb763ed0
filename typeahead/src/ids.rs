//! Widget id generation.
//!
//! Ids are drawn from a generator owned by the caller instead of a
//! process-wide counter, so two hosts never share a sequence.

use uuid::Uuid;

/// Produces unique widget ids.
pub trait IdGenerator {
    /// Produce the next id, prefixed with `prefix`.
    fn next_id(&mut self, prefix: &str) -> String;
}

/// Sequential ids: `prefix-0`, `prefix-1`, ...
#[derive(Debug, Clone, Default)]
pub struct SequentialIds {
    next: usize,
}

impl SequentialIds {
    /// Create a generator starting at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a generator starting at `start`.
    pub fn starting_at(start: usize) -> Self {
        Self { next: start }
    }
}

impl IdGenerator for SequentialIds {
    fn next_id(&mut self, prefix: &str) -> String {
        let id = format!("{}-{}", prefix, self.next);
        self.next += 1;
        id
    }
}

/// Random v4 UUID ids: `prefix-<uuid>`.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidIds;

impl IdGenerator for UuidIds {
    fn next_id(&mut self, prefix: &str) -> String {
        format!("{}-{}", prefix, Uuid::new_v4())
    }
}
