//! The command-to-event dispatch gateway.
//!
//! Each submitted command is appended to the gateway's `CommandLog`, turned
//! into an event by prefixing it with the configured tag, and forwarded
//! through the injected `Gate`. The log append happens before dispatch, so a
//! failed dispatch still leaves the command recorded.

use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;
use cqrs_gate_core::command::{Command, CommandHandler};
use cqrs_gate_core::error::GatewayError;
use cqrs_gate_core::event::Event;
use cqrs_gate_core::gate::Gate;

use crate::config::GatewayConfig;
use crate::domain::command_log::CommandLog;

/// Accepts commands, records them and dispatches a derived event per command.
pub struct CommandEventGateway {
    gate: Arc<dyn Gate>,
    config: GatewayConfig,
    log: Mutex<CommandLog>,
}

impl CommandEventGateway {
    /// Create a gateway bound to `gate` with the default configuration.
    #[must_use]
    pub fn new(gate: Arc<dyn Gate>) -> Self {
        Self::with_config(gate, GatewayConfig::default())
    }

    /// Create a gateway bound to `gate` with an explicit configuration.
    #[must_use]
    pub fn with_config(gate: Arc<dyn Gate>, config: GatewayConfig) -> Self {
        Self {
            gate,
            config,
            log: Mutex::new(CommandLog::new()),
        }
    }

    /// Records `command`, dispatches its derived event and returns the number
    /// of commands recorded so far, this one included.
    ///
    /// The append and the length read happen under one lock, so the Nth
    /// accepted command reports N regardless of how many callers race.
    ///
    /// # Errors
    ///
    /// Returns `GatewayError::InvalidCommand` if empty commands are rejected
    /// and `command` is blank; nothing is recorded in that case. Returns
    /// `GatewayError::DispatchFailure` or `GatewayError::DispatchTimeout` if
    /// the gate fails; the command stays recorded.
    pub async fn submit(&self, command: impl Into<Command>) -> Result<usize, GatewayError> {
        self.accept(command.into()).await
    }

    /// Snapshot of the recorded commands in submission order.
    #[must_use]
    pub fn commands(&self) -> Vec<Command> {
        self.log().entries().to_vec()
    }

    /// Number of commands recorded so far.
    #[must_use]
    pub fn submitted_count(&self) -> usize {
        self.log().len()
    }

    /// The configuration this gateway runs with.
    #[must_use]
    pub fn config(&self) -> &GatewayConfig {
        &self.config
    }

    #[tracing::instrument(name = "gateway.submit", skip_all, fields(command = %command))]
    async fn accept(&self, command: Command) -> Result<usize, GatewayError> {
        if self.config.reject_empty_commands && command.is_blank() {
            return Err(GatewayError::InvalidCommand(format!(
                "{:?} is empty",
                command.as_str()
            )));
        }

        let event = Event::derived_from(&command, &self.config.event_prefix);
        let sequence = self.log().append(command);
        tracing::debug!(sequence, "command recorded");

        self.dispatch(event).await?;
        tracing::debug!(sequence, "event dispatched");

        Ok(sequence)
    }

    async fn dispatch(&self, event: Event) -> Result<(), GatewayError> {
        let outcome = match self.config.dispatch_timeout {
            None => self.gate.dispatch_event(event.clone()).await,
            Some(timeout) => {
                match tokio::time::timeout(timeout, self.gate.dispatch_event(event.clone())).await
                {
                    Ok(outcome) => outcome,
                    Err(_) => return Err(GatewayError::DispatchTimeout { event, timeout }),
                }
            }
        };

        outcome.map_err(|source| GatewayError::DispatchFailure { event, source })
    }

    // The log is append-only, so a panic elsewhere cannot leave it torn.
    fn log(&self) -> MutexGuard<'_, CommandLog> {
        self.log.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl fmt::Debug for CommandEventGateway {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CommandEventGateway")
            .field("config", &self.config)
            .field("submitted", &self.submitted_count())
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl CommandHandler<Command> for CommandEventGateway {
    type Output = usize;

    async fn handle(&self, command: Command) -> Result<usize, GatewayError> {
        self.accept(command).await
    }
}
