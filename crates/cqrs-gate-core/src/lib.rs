//! CQRS Gate Core — shared command and event abstractions.
//!
//! This crate defines the value types and traits the gateway and its hosts
//! depend on. It contains no infrastructure code.

pub mod command;
pub mod error;
pub mod event;
pub mod gate;
