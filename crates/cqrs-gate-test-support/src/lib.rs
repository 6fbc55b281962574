//! Shared test gates and utilities for the CQRS gate.

mod gate;

pub use gate::{FailOnNthGate, FailingGate, RecordingGate, SlowGate};
