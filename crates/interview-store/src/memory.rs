//! In-memory room store
//!
//! Rooms live in a concurrent map; each mutation runs while holding that
//! room's entry lock, so concurrent updates to one room serialize cleanly and
//! the returned snapshot always reflects a complete mutation.

use std::sync::Arc;

use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use tracing::debug;

use interview_core::{Language, Participant, Room, RoomKey};

use crate::error::StoreError;
use crate::store::{ParticipantRemoval, RoomStore, StoreResult};

/// Room store backed by process memory
#[derive(Debug, Default)]
pub struct MemoryRoomStore {
    rooms: DashMap<RoomKey, Room>,
}

impl MemoryRoomStore {
    pub fn new() -> Self {
        Self {
            rooms: DashMap::new(),
        }
    }

    /// Create a new store wrapped in an Arc for sharing
    pub fn shared() -> Arc<Self> {
        Arc::new(Self::new())
    }

    /// Number of rooms currently stored
    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }

    /// Apply a mutation under the room's entry lock, returning the updated
    /// snapshot, or `None` when the room does not exist.
    fn update<F>(&self, key: &RoomKey, mutate: F) -> Option<Room>
    where
        F: FnOnce(&mut Room),
    {
        self.rooms.get_mut(key).map(|mut entry| {
            mutate(&mut entry);
            entry.clone()
        })
    }
}

#[async_trait::async_trait]
impl RoomStore for MemoryRoomStore {
    async fn insert(&self, room: Room) -> StoreResult<()> {
        match self.rooms.entry(room.id.clone()) {
            Entry::Occupied(_) => Err(StoreError::AlreadyExists(room.id)),
            Entry::Vacant(slot) => {
                debug!(room = %room.id, "room stored");
                slot.insert(room);
                Ok(())
            }
        }
    }

    async fn find(&self, key: &RoomKey) -> StoreResult<Option<Room>> {
        Ok(self.rooms.get(key).map(|entry| entry.clone()))
    }

    async fn join(&self, key: &RoomKey) -> StoreResult<Option<Room>> {
        Ok(self.update(key, |room| {
            room.join();
        }))
    }

    async fn leave(&self, key: &RoomKey) -> StoreResult<Option<Room>> {
        Ok(self.update(key, |room| {
            room.leave();
        }))
    }

    async fn set_code(&self, key: &RoomKey, code: String) -> StoreResult<Option<Room>> {
        Ok(self.update(key, |room| room.set_code(code)))
    }

    async fn set_language(&self, key: &RoomKey, language: Language) -> StoreResult<Option<Room>> {
        Ok(self.update(key, |room| room.set_language(language)))
    }

    async fn add_participant(
        &self,
        key: &RoomKey,
        name: Option<String>,
    ) -> StoreResult<Option<(Room, Participant)>> {
        Ok(self.rooms.get_mut(key).map(|mut entry| {
            let participant = entry.add_participant(name);
            (entry.clone(), participant)
        }))
    }

    async fn remove_participant(
        &self,
        key: &RoomKey,
        participant_id: &str,
    ) -> StoreResult<ParticipantRemoval> {
        let Some(mut entry) = self.rooms.get_mut(key) else {
            return Ok(ParticipantRemoval::RoomNotFound);
        };
        if entry.remove_participant(participant_id) {
            Ok(ParticipantRemoval::Removed(entry.clone()))
        } else {
            Ok(ParticipantRemoval::ParticipantNotFound)
        }
    }
}
