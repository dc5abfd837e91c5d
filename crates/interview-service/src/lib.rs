//! # interview-service
//!
//! Use-case layer. [`RoomService`] owns the room lifecycle: it mutates
//! records through the store and pushes the resulting state to room
//! subscribers through the broadcaster.

pub mod dto;
pub mod error;
pub mod rooms;

// Re-export commonly used types at crate root
pub use dto::{
    AddParticipantRequest, CreateRoomRequest, HealthResponse, ParticipantResponse, RoomResponse,
    UpdateCodeRequest, UpdateLanguageRequest,
};
pub use error::{ServiceError, ServiceResult};
pub use rooms::RoomService;
