//! Lightweight in-process metrics (dependency-free).
//!
//! Counters are stored as atomics and rendered by the `/metrics` handler in
//! Prometheus text exposition format.

pub mod metrics;

pub use metrics::RelayMetrics;
