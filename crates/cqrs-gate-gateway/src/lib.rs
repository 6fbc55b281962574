//! CQRS Gate — command-to-event dispatch gateway.
//!
//! Accepts commands, records them in an append-only log, derives an event
//! for each one and forwards it through an injected `Gate`.

pub mod application;
pub mod config;
pub mod domain;

pub use application::gateway::CommandEventGateway;
pub use config::GatewayConfig;
