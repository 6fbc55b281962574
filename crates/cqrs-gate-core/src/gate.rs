//! Gate abstraction.

use async_trait::async_trait;

use crate::error::GateError;
use crate::event::Event;

/// Capability that forwards events to interested downstream consumers.
///
/// How an event is routed, persisted or fanned out is up to the
/// implementation; callers only observe whether the call succeeded.
#[async_trait]
pub trait Gate: Send + Sync {
    /// Accept and forward a single event.
    async fn dispatch_event(&self, event: Event) -> Result<(), GateError>;
}
