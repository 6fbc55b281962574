//! Event abstractions.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::command::Command;

/// Tag prepended to a command to form its event.
pub const DEFAULT_EVENT_PREFIX: &str = "EVENT_";

/// A notification derived from a command and forwarded through a gate.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Event(String);

impl Event {
    /// Wrap an event value.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Derives the event for `command` by plain concatenation of `prefix` and
    /// the command text. The command text is not transformed.
    #[must_use]
    pub fn derived_from(command: &Command, prefix: &str) -> Self {
        let mut value = String::with_capacity(prefix.len() + command.as_str().len());
        value.push_str(prefix);
        value.push_str(command.as_str());
        Self(value)
    }

    /// Returns the event text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Event {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
