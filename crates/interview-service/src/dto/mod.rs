//! Data transfer objects for API requests and responses
//!
//! Request DTOs carry validation rules; response DTOs define the exact JSON
//! shape clients see, realtime and REST alike.

pub mod requests;
pub mod responses;

// Re-export commonly used types
pub use requests::{
    AddParticipantRequest, CreateRoomRequest, UpdateCodeRequest, UpdateLanguageRequest,
};
pub use responses::{HealthResponse, ParticipantResponse, RoomResponse};
