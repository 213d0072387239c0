//! Shared error type across roomrelay crates.
//!
//! Nothing in this taxonomy is fatal to the process: malformed frames are
//! dropped at the session that produced them, config errors abort startup
//! before any connection is accepted, and internal errors are confined to a
//! single connection.

use thiserror::Error;

/// Shared result type.
pub type Result<T> = std::result::Result<T, RelayError>;

/// Unified error type used by core and server.
#[derive(Debug, Error)]
pub enum RelayError {
    /// A frame that does not decode to the two-variant client protocol.
    #[error("malformed frame: {0}")]
    Malformed(String),
    /// Invalid or unreadable configuration.
    #[error("config: {0}")]
    Config(String),
    #[error("internal: {0}")]
    Internal(String),
}
