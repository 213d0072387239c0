use std::sync::Arc;

use roomrelay_core::protocol::ClientMessage;

use crate::obs::RelayMetrics;
use crate::rooms::{ConnId, Connection, RoomRegistry};

/// Per-connection protocol state machine: `unjoined -> joined`.
///
/// The joined/unjoined distinction is exactly "does the member index know this
/// connection", so the router keeps no state of its own; the registry is the
/// single source of truth and re-joins move the connection between rooms.
pub struct MessageRouter {
    registry: Arc<RoomRegistry>,
    metrics: Arc<RelayMetrics>,
}

impl MessageRouter {
    pub fn new(registry: Arc<RoomRegistry>, metrics: Arc<RelayMetrics>) -> Self {
        Self { registry, metrics }
    }

    pub fn registry(&self) -> &RoomRegistry {
        &self.registry
    }

    /// Apply one decoded frame from `conn`.
    ///
    /// - `join`: enter the given room; a second join moves silently, the old
    ///   room's peers are not notified.
    /// - `chat` while joined: relay the bare message text to the rest of the
    ///   room.
    /// - `chat` while unjoined: dropped, connection stays open.
    pub fn handle_message(&self, conn: &Connection, msg: ClientMessage) {
        match msg {
            ClientMessage::Join(p) => {
                self.registry.join(p.room_id, conn.clone());
                tracing::info!(conn = conn.id(), room = p.room_id, "joined room");
            }
            ClientMessage::Chat(p) => match self.registry.room_of(conn.id()) {
                Some(room_id) => {
                    let outcome = self.registry.broadcast(room_id, conn.id(), &p.message);
                    self.metrics.messages_relayed.add(outcome.delivered as u64);
                    self.metrics.send_failures.add(outcome.failed as u64);
                }
                None => {
                    tracing::debug!(conn = conn.id(), "chat before join, frame dropped");
                    self.metrics.frames_dropped.inc();
                }
            },
        }
    }

    /// Transport close/error cleanup. Safe to call in any state; calling it
    /// again for an already-removed connection is a no-op.
    pub fn handle_close(&self, conn_id: ConnId) {
        if let Some(room_id) = self.registry.leave(conn_id) {
            tracing::info!(conn = conn_id, room = room_id, "left room on disconnect");
        }
    }
}
