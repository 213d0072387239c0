use std::sync::atomic::{AtomicU64, Ordering};

use axum::extract::ws::Message;
use tokio::sync::mpsc;

/// Server-side connection identifier, assigned at accept time.
pub type ConnId = u64;

static NEXT_CONN_ID: AtomicU64 = AtomicU64::new(1);

/// Allocate a fresh connection id.
pub fn next_conn_id() -> ConnId {
    NEXT_CONN_ID.fetch_add(1, Ordering::Relaxed)
}

/// One connection's outbound queue sender.
///
/// The session task owns the socket; the registry holds clones of this handle
/// only. Delivery is fire-and-forget: a full or closed queue means the frame
/// is dropped for that peer, never an error for the caller.
#[derive(Clone)]
pub struct Connection {
    id: ConnId,
    tx: mpsc::Sender<Message>,
}

impl Connection {
    pub fn new(id: ConnId, tx: mpsc::Sender<Message>) -> Self {
        Self { id, tx }
    }

    pub fn id(&self) -> ConnId {
        self.id
    }

    /// Enqueue a text frame for this peer. Returns false if the frame was
    /// dropped (queue full or session already closed).
    pub fn send_text(&self, text: &str) -> bool {
        match self.tx.try_send(Message::Text(text.to_owned())) {
            Ok(()) => true,
            Err(e) => {
                tracing::debug!(conn = self.id, "outbound frame dropped: {e}");
                false
            }
        }
    }
}
