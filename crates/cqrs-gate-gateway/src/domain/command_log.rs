//! Append-only record of accepted commands.

use cqrs_gate_core::command::Command;

/// Ordered, append-only sequence of commands.
///
/// The only mutation is `append`; entries are never reordered, replaced or
/// removed.
#[derive(Debug, Default, Clone)]
pub struct CommandLog {
    entries: Vec<Command>,
}

impl CommandLog {
    /// Create an empty log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `command` at the tail and returns the new length.
    pub fn append(&mut self, command: Command) -> usize {
        self.entries.push(command);
        self.entries.len()
    }

    /// Number of commands recorded.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if nothing has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Recorded commands in submission order.
    #[must_use]
    pub fn entries(&self) -> &[Command] {
        &self.entries
    }
}
