//! Command abstractions.

use std::fmt;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::GatewayError;

/// An opaque textual command submitted by a caller.
///
/// Commands carry no identity beyond their value; two commands with the same
/// text are equal, and nothing prevents the same command being submitted twice.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Command(String);

impl Command {
    /// Wrap a command value.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Returns the command text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns `true` if the command is empty or whitespace-only.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }

    /// Consumes the command and returns the underlying text.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl From<String> for Command {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for Command {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A typed handler for commands of type `C`.
///
/// Implementations decide what `Output` reports back to the caller; the
/// gateway reports the number of commands it has accepted so far.
#[async_trait]
pub trait CommandHandler<C>: Send + Sync
where
    C: Send + 'static,
{
    /// The value reported to the caller on success.
    type Output;

    /// Handle a single command.
    async fn handle(&self, command: C) -> Result<Self::Output, GatewayError>;
}

#[cfg(test)]
mod tests {
    use super::Command;

    #[test]
    fn test_command_is_blank_for_whitespace_only_text() {
        assert!(Command::from("").is_blank());
        assert!(Command::from("  \t").is_blank());
        assert!(!Command::from(" a ").is_blank());
    }

    #[test]
    fn test_command_serializes_as_plain_string() {
        // Arrange
        let command = Command::new("open-account");

        // Act
        let json = serde_json::to_value(&command).unwrap();

        // Assert
        assert_eq!(json, serde_json::json!("open-account"));
    }

    #[test]
    fn test_command_display_is_unmodified_text() {
        let command = Command::from(String::from("Mixed Case 42"));

        assert_eq!(command.to_string(), "Mixed Case 42");
        assert_eq!(command.into_inner(), "Mixed Case 42");
    }
}
