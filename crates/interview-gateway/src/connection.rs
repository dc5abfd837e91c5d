//! Individual subscriber connection
//!
//! Represents one WebSocket client from the registry's point of view: an id,
//! an outbound channel, and the set of rooms the client is watching. The
//! socket itself lives elsewhere; everything here is transport-agnostic.

use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;
use std::time::{Duration, Instant};

use parking_lot::RwLock;
use tokio::sync::mpsc;
use tokio::sync::mpsc::error::SendTimeoutError;
use uuid::Uuid;

use interview_core::RoomKey;

/// Unique identifier for one connection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ConnectionId(Uuid);

impl ConnectionId {
    pub(crate) fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for ConnectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Failure modes for a single delivery attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SendError {
    /// The receiving half is gone; the connection is dead
    #[error("connection channel closed")]
    Closed,
    /// The outbound queue stayed full past the deadline
    #[error("send timed out")]
    TimedOut,
}

/// One subscriber connection
///
/// The room set uses a non-async lock: it is only ever held for a handful of
/// hash operations, never across an await point.
pub struct RoomConnection {
    /// Unique connection id
    id: ConnectionId,

    /// Channel to the task writing frames onto the socket
    sender: mpsc::Sender<Arc<str>>,

    /// Rooms this connection is subscribed to
    rooms: RwLock<HashSet<RoomKey>>,

    /// Connection creation time
    created_at: Instant,
}

impl RoomConnection {
    /// Create a new connection handle
    pub(crate) fn new(sender: mpsc::Sender<Arc<str>>) -> Arc<Self> {
        Arc::new(Self {
            id: ConnectionId::new(),
            sender,
            rooms: RwLock::new(HashSet::new()),
            created_at: Instant::now(),
        })
    }

    /// Get the connection id
    #[inline]
    pub fn id(&self) -> ConnectionId {
        self.id
    }

    /// Attempt one delivery to this connection, bounded by `timeout`.
    ///
    /// Queueing the frame counts as delivery; the socket writer drains the
    /// queue in order, so two frames queued here arrive in the same order.
    pub async fn send(&self, frame: Arc<str>, timeout: Duration) -> Result<(), SendError> {
        self.sender
            .send_timeout(frame, timeout)
            .await
            .map_err(|err| match err {
                SendTimeoutError::Timeout(_) => SendError::TimedOut,
                SendTimeoutError::Closed(_) => SendError::Closed,
            })
    }

    /// Check if the outbound channel has been dropped
    pub fn is_closed(&self) -> bool {
        self.sender.is_closed()
    }

    /// Add a room to this connection's subscription set
    pub(crate) fn track_room(&self, room: RoomKey) {
        self.rooms.write().insert(room);
    }

    /// Remove a room from this connection's subscription set
    pub(crate) fn untrack_room(&self, room: &RoomKey) {
        self.rooms.write().remove(room);
    }

    /// Take every tracked room, leaving the set empty
    pub(crate) fn clear_rooms(&self) -> Vec<RoomKey> {
        self.rooms.write().drain().collect()
    }

    /// Get all subscribed rooms
    pub fn rooms(&self) -> Vec<RoomKey> {
        self.rooms.read().iter().cloned().collect()
    }

    /// Check if subscribed to a room
    pub fn is_subscribed(&self, room: &RoomKey) -> bool {
        self.rooms.read().contains(room)
    }

    /// Get connection age
    pub fn age(&self) -> Duration {
        self.created_at.elapsed()
    }
}

impl fmt::Debug for RoomConnection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RoomConnection")
            .field("id", &self.id)
            .field("rooms", &self.rooms.read().len())
            .field("closed", &self.is_closed())
            .finish()
    }
}
