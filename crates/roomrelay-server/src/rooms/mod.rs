//! Room membership core.
//!
//! Connection handles, the room registry, and the empty-room-deletion
//! invariant live here.

mod connection;
mod registry;

pub use connection::{next_conn_id, ConnId, Connection};
pub use registry::{BroadcastOutcome, RoomRegistry};
