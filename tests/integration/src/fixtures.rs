//! Test fixtures and wire-format mirrors
//!
//! Request builders and response mirror types for integration tests. The
//! mirrors deserialize exactly what the server puts on the wire, so a field
//! rename on either side breaks a test instead of passing silently.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// Create room request
#[derive(Debug, Default, Serialize)]
pub struct CreateRoomRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

impl CreateRoomRequest {
    pub fn with_language(language: &str) -> Self {
        Self {
            language: Some(language.to_string()),
        }
    }
}

/// Update code request
#[derive(Debug, Serialize)]
pub struct UpdateCodeRequest {
    pub code: String,
}

impl UpdateCodeRequest {
    pub fn new(code: &str) -> Self {
        Self {
            code: code.to_string(),
        }
    }
}

/// Update language request
#[derive(Debug, Serialize)]
pub struct UpdateLanguageRequest {
    pub language: String,
}

impl UpdateLanguageRequest {
    pub fn new(language: &str) -> Self {
        Self {
            language: language.to_string(),
        }
    }
}

/// Add participant request
#[derive(Debug, Default, Serialize)]
pub struct AddParticipantRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl AddParticipantRequest {
    pub fn named(name: &str) -> Self {
        Self {
            name: Some(name.to_string()),
        }
    }
}

/// Room response mirror
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomResponse {
    pub id: String,
    pub code: String,
    pub language: String,
    pub created_at: i64,
    pub participants: usize,
}

/// Participant response mirror
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParticipantResponse {
    pub id: String,
    pub name: Option<String>,
    pub joined_at: i64,
}

/// Health response mirror
#[derive(Debug, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}

/// Error response mirror
#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    pub error: ErrorDetail,
}

/// Error detail mirror
#[derive(Debug, Deserialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
    #[serde(default)]
    pub details: Option<Value>,
}

/// Realtime room event mirror
#[derive(Debug, Deserialize)]
pub struct RoomUpdateEvent {
    #[serde(rename = "type")]
    pub event_type: String,
    #[serde(rename = "roomId")]
    pub room_id: String,
    pub room: Value,
}

impl RoomUpdateEvent {
    /// Parse a raw frame into an event mirror
    pub fn from_value(value: Value) -> anyhow::Result<Self> {
        Ok(serde_json::from_value(value)?)
    }
}

/// Build a subscribe control frame
pub fn subscribe_frame(room_id: &str) -> Value {
    json!({ "action": "subscribe", "roomId": room_id })
}

/// Build an unsubscribe control frame
pub fn unsubscribe_frame(room_id: &str) -> Value {
    json!({ "action": "unsubscribe", "roomId": room_id })
}
