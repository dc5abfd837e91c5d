//! Room store trait (port) - defines the interface for room persistence
//!
//! The service layer defines what it needs here; implementations decide where
//! the records actually live. Mutating operations return the updated room
//! snapshot so callers can publish it to subscribers without a second read.

use async_trait::async_trait;

use interview_core::{Language, Participant, Room, RoomKey};

use crate::error::StoreError;

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Outcome of removing a participant from a room
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParticipantRemoval {
    /// Participant removed; carries the updated room
    Removed(Room),
    /// The room exists but holds no participant with that id
    ParticipantNotFound,
    /// No room with that key
    RoomNotFound,
}

#[async_trait]
pub trait RoomStore: Send + Sync {
    /// Insert a freshly created room
    ///
    /// Fails with [`StoreError::AlreadyExists`] when the key is taken, so
    /// callers can retry with a different key.
    async fn insert(&self, room: Room) -> StoreResult<()>;

    /// Fetch a room by key
    async fn find(&self, key: &RoomKey) -> StoreResult<Option<Room>>;

    /// Record an anonymous join, returning the updated room
    async fn join(&self, key: &RoomKey) -> StoreResult<Option<Room>>;

    /// Record an anonymous leave, returning the updated room
    async fn leave(&self, key: &RoomKey) -> StoreResult<Option<Room>>;

    /// Replace the shared code, returning the updated room
    async fn set_code(&self, key: &RoomKey, code: String) -> StoreResult<Option<Room>>;

    /// Switch the editor language, returning the updated room
    async fn set_language(&self, key: &RoomKey, language: Language) -> StoreResult<Option<Room>>;

    /// Add a participant, returning the updated room and the new entry
    async fn add_participant(
        &self,
        key: &RoomKey,
        name: Option<String>,
    ) -> StoreResult<Option<(Room, Participant)>>;

    /// Remove a participant by id
    async fn remove_participant(
        &self,
        key: &RoomKey,
        participant_id: &str,
    ) -> StoreResult<ParticipantRemoval>;
}
