//! Application services for the gateway.

pub mod gateway;
