//! Gateway configuration.

use std::time::Duration;

use cqrs_gate_core::error::GatewayError;
use cqrs_gate_core::event::DEFAULT_EVENT_PREFIX;

const EVENT_PREFIX_VAR: &str = "GATEWAY_EVENT_PREFIX";
const REJECT_EMPTY_COMMANDS_VAR: &str = "GATEWAY_REJECT_EMPTY_COMMANDS";
const DISPATCH_TIMEOUT_MS_VAR: &str = "GATEWAY_DISPATCH_TIMEOUT_MS";

/// Runtime settings for a `CommandEventGateway`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GatewayConfig {
    /// Tag prepended to each command to form its event.
    pub event_prefix: String,
    /// Reject empty or whitespace-only commands before they are logged.
    pub reject_empty_commands: bool,
    /// Upper bound on a single gate dispatch. `None` waits indefinitely.
    pub dispatch_timeout: Option<Duration>,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            event_prefix: DEFAULT_EVENT_PREFIX.to_owned(),
            reject_empty_commands: false,
            dispatch_timeout: None,
        }
    }
}

impl GatewayConfig {
    /// Reads configuration from the process environment, falling back to the
    /// defaults for unset variables.
    ///
    /// # Errors
    ///
    /// Returns `GatewayError::Configuration` if a variable is set but
    /// malformed.
    pub fn from_env() -> Result<Self, GatewayError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds configuration from an arbitrary key lookup.
    ///
    /// # Errors
    ///
    /// Returns `GatewayError::Configuration` if a value is malformed.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, GatewayError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let event_prefix = lookup(EVENT_PREFIX_VAR).unwrap_or(defaults.event_prefix);

        let reject_empty_commands = match lookup(REJECT_EMPTY_COMMANDS_VAR) {
            Some(raw) => parse_bool(REJECT_EMPTY_COMMANDS_VAR, &raw)?,
            None => defaults.reject_empty_commands,
        };

        let dispatch_timeout = match lookup(DISPATCH_TIMEOUT_MS_VAR) {
            Some(raw) => Some(parse_timeout(&raw)?),
            None => defaults.dispatch_timeout,
        };

        Ok(Self {
            event_prefix,
            reject_empty_commands,
            dispatch_timeout,
        })
    }
}

fn parse_bool(key: &str, raw: &str) -> Result<bool, GatewayError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "1" => Ok(true),
        "false" | "0" => Ok(false),
        other => Err(GatewayError::Configuration(format!(
            "{key} must be true/false/1/0, got {other:?}"
        ))),
    }
}

fn parse_timeout(raw: &str) -> Result<Duration, GatewayError> {
    let millis: u64 = raw.trim().parse().map_err(|e| {
        GatewayError::Configuration(format!(
            "{DISPATCH_TIMEOUT_MS_VAR} must be a valid u64: {e}"
        ))
    })?;
    if millis == 0 {
        return Err(GatewayError::Configuration(format!(
            "{DISPATCH_TIMEOUT_MS_VAR} must be greater than zero"
        )));
    }
    Ok(Duration::from_millis(millis))
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::time::Duration;

    use cqrs_gate_core::error::GatewayError;

    use super::GatewayConfig;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_from_lookup_with_no_variables_uses_defaults() {
        let config = GatewayConfig::from_lookup(lookup_from(&[])).unwrap();

        assert_eq!(config, GatewayConfig::default());
        assert_eq!(config.event_prefix, "EVENT_");
        assert!(!config.reject_empty_commands);
        assert_eq!(config.dispatch_timeout, None);
    }

    #[test]
    fn test_from_lookup_reads_all_variables() {
        // Arrange
        let lookup = lookup_from(&[
            ("GATEWAY_EVENT_PREFIX", "EVT:"),
            ("GATEWAY_REJECT_EMPTY_COMMANDS", "TRUE"),
            ("GATEWAY_DISPATCH_TIMEOUT_MS", "250"),
        ]);

        // Act
        let config = GatewayConfig::from_lookup(lookup).unwrap();

        // Assert
        assert_eq!(config.event_prefix, "EVT:");
        assert!(config.reject_empty_commands);
        assert_eq!(config.dispatch_timeout, Some(Duration::from_millis(250)));
    }

    #[test]
    fn test_from_lookup_rejects_malformed_bool() {
        let result =
            GatewayConfig::from_lookup(lookup_from(&[("GATEWAY_REJECT_EMPTY_COMMANDS", "yes")]));

        assert!(matches!(result, Err(GatewayError::Configuration(_))));
    }

    #[test]
    fn test_from_lookup_rejects_non_numeric_timeout() {
        let result =
            GatewayConfig::from_lookup(lookup_from(&[("GATEWAY_DISPATCH_TIMEOUT_MS", "soon")]));

        assert!(matches!(result, Err(GatewayError::Configuration(_))));
    }

    #[test]
    fn test_from_lookup_rejects_zero_timeout() {
        let result =
            GatewayConfig::from_lookup(lookup_from(&[("GATEWAY_DISPATCH_TIMEOUT_MS", "0")]));

        assert!(matches!(result, Err(GatewayError::Configuration(_))));
    }
}
