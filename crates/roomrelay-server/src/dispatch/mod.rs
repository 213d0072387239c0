//! Message routing.
//!
//! Decoded frames and transport close events are turned into registry side
//! effects here.

mod router;

pub use router::MessageRouter;
