//! Test gates — mock `Gate` implementations for tests.

use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use cqrs_gate_core::error::GateError;
use cqrs_gate_core::event::Event;
use cqrs_gate_core::gate::Gate;

/// A gate that records every dispatched event and always succeeds.
#[derive(Debug, Default)]
pub struct RecordingGate {
    dispatched: Mutex<Vec<Event>>,
}

impl RecordingGate {
    /// Create a new recording gate with no dispatched events.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a snapshot of all events dispatched so far, in call order.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    pub fn dispatched_events(&self) -> Vec<Event> {
        self.dispatched.lock().unwrap().clone()
    }
}

#[async_trait]
impl Gate for RecordingGate {
    async fn dispatch_event(&self, event: Event) -> Result<(), GateError> {
        self.dispatched.lock().unwrap().push(event);
        Ok(())
    }
}

/// A gate that always returns `GateError::Unavailable`. Useful for testing
/// error-handling paths.
#[derive(Debug, Default)]
pub struct FailingGate {
    attempts: AtomicUsize,
}

impl FailingGate {
    /// Create a new failing gate.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of dispatch attempts made against this gate.
    pub fn attempts(&self) -> usize {
        self.attempts.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Gate for FailingGate {
    async fn dispatch_event(&self, _event: Event) -> Result<(), GateError> {
        self.attempts.fetch_add(1, Ordering::SeqCst);
        Err(GateError::Unavailable("connection refused".into()))
    }
}

/// A gate that succeeds on every call except the `n`th (1-based), which fails
/// with `GateError::Rejected`. Successful events are recorded.
#[derive(Debug)]
pub struct FailOnNthGate {
    fail_on: usize,
    calls: AtomicUsize,
    dispatched: Mutex<Vec<Event>>,
}

impl FailOnNthGate {
    /// Create a gate that fails on call number `fail_on`.
    #[must_use]
    pub fn new(fail_on: usize) -> Self {
        Self {
            fail_on,
            calls: AtomicUsize::new(0),
            dispatched: Mutex::new(Vec::new()),
        }
    }

    /// Returns a snapshot of the events that were dispatched successfully.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    pub fn dispatched_events(&self) -> Vec<Event> {
        self.dispatched.lock().unwrap().clone()
    }
}

#[async_trait]
impl Gate for FailOnNthGate {
    async fn dispatch_event(&self, event: Event) -> Result<(), GateError> {
        let call = self.calls.fetch_add(1, Ordering::SeqCst) + 1;
        if call == self.fail_on {
            return Err(GateError::Rejected(format!("call {call} rejected")));
        }
        self.dispatched.lock().unwrap().push(event);
        Ok(())
    }
}

/// A gate that sleeps for a fixed delay before accepting each event. Used to
/// exercise dispatch timeouts.
#[derive(Debug)]
pub struct SlowGate {
    delay: Duration,
}

impl SlowGate {
    /// Create a gate that waits `delay` before every dispatch completes.
    #[must_use]
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

#[async_trait]
impl Gate for SlowGate {
    async fn dispatch_event(&self, _event: Event) -> Result<(), GateError> {
        tokio::time::sleep(self.delay).await;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use cqrs_gate_core::error::GateError;
    use cqrs_gate_core::event::Event;
    use cqrs_gate_core::gate::Gate;

    use super::{FailOnNthGate, FailingGate};

    #[tokio::test]
    async fn test_fail_on_nth_gate_only_fails_the_configured_call() {
        // Arrange
        let gate = FailOnNthGate::new(2);

        // Act
        let first = gate.dispatch_event(Event::from("EVENT_a")).await;
        let second = gate.dispatch_event(Event::from("EVENT_b")).await;
        let third = gate.dispatch_event(Event::from("EVENT_c")).await;

        // Assert
        assert!(first.is_ok());
        assert_eq!(second, Err(GateError::Rejected("call 2 rejected".into())));
        assert!(third.is_ok());
        assert_eq!(
            gate.dispatched_events(),
            vec![Event::from("EVENT_a"), Event::from("EVENT_c")]
        );
    }

    #[tokio::test]
    async fn test_failing_gate_counts_attempts() {
        let gate = FailingGate::new();

        let _ = gate.dispatch_event(Event::from("EVENT_a")).await;
        let _ = gate.dispatch_event(Event::from("EVENT_a")).await;

        assert_eq!(gate.attempts(), 2);
    }
}
