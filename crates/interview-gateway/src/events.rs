//! Events pushed to room subscribers

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Kind of realtime event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RoomEventType {
    RoomUpdate,
}

impl RoomEventType {
    /// Wire name of the event type
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::RoomUpdate => "ROOM_UPDATE",
        }
    }
}

impl fmt::Display for RoomEventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One event as sent to subscribers
///
/// The `room` payload is an already-shaped JSON document; the realtime layer
/// moves it without caring what is inside.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoomEvent {
    #[serde(rename = "type")]
    pub event_type: RoomEventType,
    #[serde(rename = "roomId")]
    pub room_id: String,
    pub room: Value,
}

impl RoomEvent {
    /// Build a room-state update event
    pub fn room_update(room_id: impl Into<String>, room: Value) -> Self {
        Self {
            event_type: RoomEventType::RoomUpdate,
            room_id: room_id.into(),
            room,
        }
    }

    /// Serialize the event to its wire form
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
