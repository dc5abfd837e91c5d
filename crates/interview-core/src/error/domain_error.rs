//! Domain errors - error types for the domain layer

use thiserror::Error;

/// Domain layer errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("Room not found: {0}")]
    RoomNotFound(String),

    #[error("Participant not found: {0}")]
    ParticipantNotFound(String),

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Room key must not be empty")]
    EmptyRoomKey,

    #[error("Unknown language: {0}")]
    UnknownLanguage(String),

    #[error("Validation error: {0}")]
    ValidationError(String),
}

impl DomainError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            Self::RoomNotFound(_) => "UNKNOWN_ROOM",
            Self::ParticipantNotFound(_) => "UNKNOWN_PARTICIPANT",
            Self::EmptyRoomKey => "INVALID_ROOM_KEY",
            Self::UnknownLanguage(_) => "UNKNOWN_LANGUAGE",
            Self::ValidationError(_) => "VALIDATION_ERROR",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::RoomNotFound(_) | Self::ParticipantNotFound(_))
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::EmptyRoomKey | Self::UnknownLanguage(_) | Self::ValidationError(_)
        )
    }
}
