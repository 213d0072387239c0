//! Client wire protocol (JSON text frames).
//!
//! Inbound frames are a two-variant tagged union; outbound relay is the bare
//! chat text, not re-wrapped JSON. The decoder is panic-free: malformed input
//! is reported as `RelayError::Malformed` instead of indexing raw buffers.

pub mod message;

pub use message::{decode, ChatPayload, ClientMessage, JoinPayload, RoomId};
