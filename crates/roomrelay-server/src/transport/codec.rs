//! Decode-once codec for the transport layer.
//!
//! - Text frames => `ClientMessage` (typed two-variant protocol)
//! - Ping/Pong/Close are surfaced for lifecycle management
//! - Binary frames are a protocol error; the client speaks JSON text only

use axum::extract::ws::Message;
use roomrelay_core::{
    error::{RelayError, Result},
    protocol::{self, ClientMessage},
};

#[derive(Debug)]
pub enum Inbound {
    Frame { msg: ClientMessage, bytes_len: usize },
    Ping(Vec<u8>),
    Pong,
    Close,
}

/// Cheap frame length, computed before any decode so oversized frames can be
/// rejected without parsing them.
pub fn frame_len(msg: &Message) -> usize {
    match msg {
        Message::Text(s) => s.as_bytes().len(),
        Message::Binary(b) => b.len(),
        Message::Ping(v) => v.len(),
        Message::Pong(v) => v.len(),
        Message::Close(_) => 0,
    }
}

/// Whether a frame exceeds the configured limit. Decided on the raw length,
/// before any decode.
pub fn is_oversized(msg: &Message, max_frame_bytes: usize) -> bool {
    frame_len(msg) > max_frame_bytes
}

pub fn decode(msg: Message) -> Result<Inbound> {
    match msg {
        Message::Text(s) => {
            let bytes_len = s.as_bytes().len();
            let msg = protocol::decode(&s)?;
            Ok(Inbound::Frame { msg, bytes_len })
        }
        Message::Binary(_) => Err(RelayError::Malformed("binary frames not supported".into())),
        Message::Ping(v) => Ok(Inbound::Ping(v)),
        Message::Pong(_) => Ok(Inbound::Pong),
        Message::Close(_) => Ok(Inbound::Close),
    }
}
