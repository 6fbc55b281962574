//! Domain types owned by the gateway.

pub mod command_log;
