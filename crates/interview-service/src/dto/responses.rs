//! Response DTOs for API endpoints
//!
//! All response DTOs implement `Serialize` for JSON output. Timestamps are
//! serialized as epoch milliseconds, field names as camelCase; this is the
//! one shape clients see, whether a document arrives over REST or inside a
//! realtime event.

use serde::Serialize;

use interview_core::{Language, Participant, Room};

/// Room as seen by clients
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomResponse {
    pub id: String,
    pub code: String,
    pub language: Language,
    /// Creation time in epoch milliseconds
    pub created_at: i64,
    /// Number of people currently in the room
    pub participants: usize,
}

impl From<&Room> for RoomResponse {
    fn from(room: &Room) -> Self {
        Self {
            id: room.id.to_string(),
            code: room.code.clone(),
            language: room.language,
            created_at: room.created_at.timestamp_millis(),
            participants: room.participant_count(),
        }
    }
}

/// Participant as seen by clients
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParticipantResponse {
    pub id: String,
    pub name: Option<String>,
    /// Join time in epoch milliseconds
    pub joined_at: i64,
}

impl From<&Participant> for ParticipantResponse {
    fn from(participant: &Participant) -> Self {
        Self {
            id: participant.id.clone(),
            name: participant.name.clone(),
            joined_at: participant.joined_at.timestamp_millis(),
        }
    }
}

/// Health check response
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

impl HealthResponse {
    #[must_use]
    pub fn healthy() -> Self {
        Self { status: "ok" }
    }
}
