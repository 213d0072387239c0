//! Inbound message shapes.
//!
//! Two variants, adjacently tagged; field names are part of the contract:
//!
//! ```json
//! { "type": "join", "payload": { "roomId": 4821 } }
//! { "type": "chat", "payload": { "message": "hi" } }
//! ```
//!
//! Unknown types, unknown payload fields, and missing fields are rejected at
//! the boundary rather than tolerated by accidental string handling.

use serde::Deserialize;

use crate::error::{RelayError, Result};

/// Room identifier as supplied by clients. Any JSON integer is a valid code;
/// duplicate codes map to the same room, which is the sharing mechanism.
pub type RoomId = i64;

/// One inbound client frame.
#[derive(Debug, Deserialize, PartialEq)]
#[serde(tag = "type", content = "payload", rename_all = "lowercase")]
pub enum ClientMessage {
    Join(JoinPayload),
    Chat(ChatPayload),
}

#[derive(Debug, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct JoinPayload {
    #[serde(rename = "roomId")]
    pub room_id: RoomId,
}

#[derive(Debug, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ChatPayload {
    pub message: String,
}

/// Decode one text frame into a `ClientMessage`.
pub fn decode(text: &str) -> Result<ClientMessage> {
    serde_json::from_str(text).map_err(|e| RelayError::Malformed(format!("invalid message json: {e}")))
}
