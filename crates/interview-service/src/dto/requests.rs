//! Request DTOs for API endpoints
//!
//! All request DTOs implement `Deserialize` and `Validate` for input validation.

use serde::Deserialize;
use validator::Validate;

use interview_core::Language;

/// Upper bound on shared code size, matching what an editor session can
/// plausibly hold.
pub const MAX_CODE_LEN: u64 = 100_000;

/// Create room request; the body is optional and defaults to JavaScript
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct CreateRoomRequest {
    pub language: Option<Language>,
}

/// Replace the shared code of a room
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateCodeRequest {
    #[validate(length(max = 100_000, message = "Code must be at most 100000 characters"))]
    pub code: String,
}

/// Switch the room's editor language
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateLanguageRequest {
    pub language: Language,
}

/// Add a (possibly named) participant to a room
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct AddParticipantRequest {
    #[validate(length(min = 1, max = 128, message = "Name must be 1-128 characters"))]
    pub name: Option<String>,
}
