//! roomrelay server library entry.
//!
//! This crate wires the transport, room registry, message router, and metrics
//! into the ephemeral room relay. It is intended to be consumed by the binary
//! (`main.rs`) and by integration tests.

pub mod app_state;
pub mod config;
pub mod dispatch;
pub mod obs;
pub mod rooms;
pub mod router;
pub mod transport;
