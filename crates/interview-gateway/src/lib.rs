//! # interview-gateway
//!
//! Realtime layer: tracks WebSocket connections, their room subscriptions,
//! and fans room events out to subscribers.
//!
//! The moving parts:
//! - [`RoomRegistry`] - who is connected and watching which rooms
//! - [`Broadcaster`] - snapshot a room's membership, deliver to each member
//!   independently, drop the ones that fail
//! - [`ControlFrame`] - the inbound subscribe/unsubscribe protocol
//! - [`handle_socket`] - the per-connection session loop

pub mod broadcast;
pub mod connection;
pub mod events;
pub mod protocol;
pub mod registry;
pub mod socket;

// Re-export commonly used types at crate root
pub use broadcast::{Broadcaster, DEFAULT_SEND_TIMEOUT};
pub use connection::{ConnectionId, RoomConnection, SendError};
pub use events::{RoomEvent, RoomEventType};
pub use protocol::{ControlAction, ControlCommand, ControlFrame};
pub use registry::RoomRegistry;
pub use socket::{handle_socket, DEFAULT_OUTBOUND_BUFFER};
