//! Storage errors

use interview_core::RoomKey;
use thiserror::Error;

/// Errors raised by room stores
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("Room already exists: {0}")]
    AlreadyExists(RoomKey),
}
