use std::collections::HashMap;

use dashmap::mapref::entry::Entry;
use dashmap::DashMap;

use roomrelay_core::protocol::RoomId;

use crate::rooms::connection::{ConnId, Connection};

/// Members of one room. Only ever touched under the registry's shard lock for
/// the owning room key, so a plain HashMap suffices inside.
#[derive(Default)]
struct Room {
    members: HashMap<ConnId, Connection>,
}

/// Delivery tally for one broadcast call.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct BroadcastOutcome {
    pub delivered: usize,
    pub failed: usize,
}

/// Process-wide room store:
/// - `room_id -> Room` (sole owner of all rooms)
/// - `conn_id -> room_id` (at-most-one-room-per-connection index)
///
/// Concurrency discipline: every mutation of a room happens through the
/// DashMap entry API, which holds the shard write lock for that key across the
/// whole mutation. Two simultaneous joins to the same id therefore land in one
/// Room, and a leave that empties a room removes it inside the same locked
/// access, so a concurrent join can never observe a half-deleted room.
///
/// Invariant: a room with zero members does not exist in the map, not even
/// transiently outside a shard lock.
#[derive(Default)]
pub struct RoomRegistry {
    rooms: DashMap<RoomId, Room>,
    member_index: DashMap<ConnId, RoomId>,
}

impl RoomRegistry {
    pub fn new() -> Self {
        Self {
            rooms: DashMap::new(),
            member_index: DashMap::new(),
        }
    }

    /// Add `conn` to `room_id`, creating the room if it does not exist yet.
    /// A connection already in a different room is moved: removed from the old
    /// room first (deleting it if that emptied it), then inserted.
    pub fn join(&self, room_id: RoomId, conn: Connection) {
        let conn_id = conn.id();
        let prev = self.member_index.insert(conn_id, room_id);
        if let Some(prev_room) = prev {
            if prev_room != room_id {
                self.remove_member(prev_room, conn_id);
            }
        }
        self.rooms
            .entry(room_id)
            .or_default()
            .members
            .insert(conn_id, conn);
    }

    /// Remove `conn_id` from whichever room it belongs to. Deletes the room in
    /// the same shard-locked access if it became empty. Idempotent: returns
    /// `None` when the connection was not in any room.
    pub fn leave(&self, conn_id: ConnId) -> Option<RoomId> {
        let (_, room_id) = self.member_index.remove(&conn_id)?;
        self.remove_member(room_id, conn_id);
        Some(room_id)
    }

    fn remove_member(&self, room_id: RoomId, conn_id: ConnId) {
        if let Entry::Occupied(mut e) = self.rooms.entry(room_id) {
            e.get_mut().members.remove(&conn_id);
            if e.get().members.is_empty() {
                e.remove();
                tracing::debug!(room = room_id, "room emptied, deleted");
            }
        }
    }

    /// Deliver `text` to every member of the room except the sender.
    /// Silent no-op when the room does not exist; a peer whose queue is closed
    /// or full is skipped and counted, the rest of the room still receives.
    pub fn broadcast(&self, room_id: RoomId, sender: ConnId, text: &str) -> BroadcastOutcome {
        let mut outcome = BroadcastOutcome::default();
        let Some(room) = self.rooms.get(&room_id) else {
            return outcome;
        };
        for (id, conn) in room.members.iter() {
            if *id == sender {
                continue;
            }
            if conn.send_text(text) {
                outcome.delivered += 1;
            } else {
                outcome.failed += 1;
            }
        }
        outcome
    }

    /// Room the connection currently belongs to, if any.
    pub fn room_of(&self, conn_id: ConnId) -> Option<RoomId> {
        self.member_index.get(&conn_id).map(|r| *r)
    }

    pub fn room_count(&self) -> usize {
        self.rooms.len()
    }

    /// Member ids of a room, unordered. Empty when the room does not exist.
    pub fn members(&self, room_id: RoomId) -> Vec<ConnId> {
        self.rooms
            .get(&room_id)
            .map(|r| r.members.keys().copied().collect())
            .unwrap_or_default()
    }
}
