//! Error types.

use std::time::Duration;

use thiserror::Error;

use crate::event::Event;

/// Failure reported by a `Gate` implementation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GateError {
    /// The gate refused the event.
    #[error("event rejected: {0}")]
    Rejected(String),

    /// The gate could not reach its downstream consumers.
    #[error("gate unavailable: {0}")]
    Unavailable(String),
}

/// Top-level error type returned by the gateway.
#[derive(Debug, Error)]
pub enum GatewayError {
    /// The gate failed to dispatch the derived event.
    #[error("dispatch of {event} failed")]
    DispatchFailure {
        /// The event that could not be dispatched.
        event: Event,
        /// The gate's failure.
        #[source]
        source: GateError,
    },

    /// The gate did not finish dispatching within the configured timeout.
    #[error("dispatch of {event} timed out after {timeout:?}")]
    DispatchTimeout {
        /// The event that was being dispatched.
        event: Event,
        /// The configured timeout.
        timeout: Duration,
    },

    /// The command was rejected before it reached the log.
    #[error("invalid command: {0}")]
    InvalidCommand(String),

    /// A configuration value is missing or malformed.
    #[error("configuration error: {0}")]
    Configuration(String),
}
