//! Top-level facade crate for roomrelay.
//!
//! Re-exports the core protocol types and the server library so users can
//! depend on a single crate.

pub mod core {
    pub use roomrelay_core::*;
}

pub mod server {
    pub use roomrelay_server::*;
}
