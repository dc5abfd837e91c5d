//! Room service
//!
//! Handles room creation, state updates, and participant management. Every
//! state-changing operation stores the mutation first, then pushes the fresh
//! room snapshot to realtime subscribers; delivery problems never fail the
//! request that caused the update.

use std::sync::Arc;

use tracing::{info, instrument, trace, warn};

use interview_core::{Room, RoomKey};
use interview_gateway::{Broadcaster, RoomEvent};
use interview_store::{ParticipantRemoval, RoomStore, StoreError};

use crate::dto::{
    AddParticipantRequest, CreateRoomRequest, ParticipantResponse, RoomResponse, UpdateCodeRequest,
    UpdateLanguageRequest,
};
use crate::error::{ServiceError, ServiceResult};

/// How many random keys to try before giving up on room creation
const MAX_KEY_ATTEMPTS: usize = 8;

/// Room service
pub struct RoomService {
    store: Arc<dyn RoomStore>,
    broadcaster: Arc<Broadcaster>,
}

impl RoomService {
    /// Create a new RoomService
    pub fn new(store: Arc<dyn RoomStore>, broadcaster: Arc<Broadcaster>) -> Self {
        Self { store, broadcaster }
    }

    /// Create a new room under a freshly generated key.
    ///
    /// Creation is not announced to subscribers: nobody can be watching a
    /// key that did not exist a moment ago.
    #[instrument(skip(self, request))]
    pub async fn create_room(&self, request: CreateRoomRequest) -> ServiceResult<RoomResponse> {
        let language = request.language.unwrap_or_default();

        for _ in 0..MAX_KEY_ATTEMPTS {
            let room = Room::new(RoomKey::generate(), language);
            match self.store.insert(room.clone()).await {
                Ok(()) => {
                    info!(room = %room.id, language = %language, "room created");
                    return Ok(RoomResponse::from(&room));
                }
                Err(StoreError::AlreadyExists(key)) => {
                    trace!(room = %key, "key collision, retrying");
                }
            }
        }

        Err(ServiceError::internal(
            "could not allocate an unused room key",
        ))
    }

    /// Get a room by key
    #[instrument(skip(self))]
    pub async fn get_room(&self, key: &RoomKey) -> ServiceResult<RoomResponse> {
        let room = self.require_room(key).await?;
        Ok(RoomResponse::from(&room))
    }

    /// Record an anonymous join and notify subscribers
    #[instrument(skip(self))]
    pub async fn join_room(&self, key: &RoomKey) -> ServiceResult<RoomResponse> {
        let room = self
            .store
            .join(key)
            .await?
            .ok_or_else(|| ServiceError::not_found("Room", key.as_str()))?;

        self.publish_room_update(&room).await;
        Ok(RoomResponse::from(&room))
    }

    /// Record an anonymous leave and notify subscribers
    #[instrument(skip(self))]
    pub async fn leave_room(&self, key: &RoomKey) -> ServiceResult<()> {
        let room = self
            .store
            .leave(key)
            .await?
            .ok_or_else(|| ServiceError::not_found("Room", key.as_str()))?;

        self.publish_room_update(&room).await;
        Ok(())
    }

    /// Replace the room's shared code and notify subscribers
    #[instrument(skip(self, request))]
    pub async fn update_code(
        &self,
        key: &RoomKey,
        request: UpdateCodeRequest,
    ) -> ServiceResult<RoomResponse> {
        let room = self
            .store
            .set_code(key, request.code)
            .await?
            .ok_or_else(|| ServiceError::not_found("Room", key.as_str()))?;

        self.publish_room_update(&room).await;
        Ok(RoomResponse::from(&room))
    }

    /// Switch the room's editor language and notify subscribers
    #[instrument(skip(self, request))]
    pub async fn update_language(
        &self,
        key: &RoomKey,
        request: UpdateLanguageRequest,
    ) -> ServiceResult<RoomResponse> {
        let room = self
            .store
            .set_language(key, request.language)
            .await?
            .ok_or_else(|| ServiceError::not_found("Room", key.as_str()))?;

        self.publish_room_update(&room).await;
        Ok(RoomResponse::from(&room))
    }

    /// List the people currently in a room
    #[instrument(skip(self))]
    pub async fn list_participants(&self, key: &RoomKey) -> ServiceResult<Vec<ParticipantResponse>> {
        let room = self.require_room(key).await?;
        Ok(room.participants.iter().map(ParticipantResponse::from).collect())
    }

    /// Add a participant to a room and notify subscribers
    #[instrument(skip(self, request))]
    pub async fn add_participant(
        &self,
        key: &RoomKey,
        request: AddParticipantRequest,
    ) -> ServiceResult<ParticipantResponse> {
        let (room, participant) = self
            .store
            .add_participant(key, request.name)
            .await?
            .ok_or_else(|| ServiceError::not_found("Room", key.as_str()))?;

        self.publish_room_update(&room).await;
        Ok(ParticipantResponse::from(&participant))
    }

    /// Remove a participant from a room and notify subscribers
    #[instrument(skip(self))]
    pub async fn remove_participant(
        &self,
        key: &RoomKey,
        participant_id: &str,
    ) -> ServiceResult<()> {
        match self.store.remove_participant(key, participant_id).await? {
            ParticipantRemoval::Removed(room) => {
                self.publish_room_update(&room).await;
                Ok(())
            }
            ParticipantRemoval::ParticipantNotFound => {
                Err(ServiceError::not_found("Participant", participant_id))
            }
            ParticipantRemoval::RoomNotFound => Err(ServiceError::not_found("Room", key.as_str())),
        }
    }

    async fn require_room(&self, key: &RoomKey) -> ServiceResult<Room> {
        self.store
            .find(key)
            .await?
            .ok_or_else(|| ServiceError::not_found("Room", key.as_str()))
    }

    /// Push the room's current state to its subscribers.
    ///
    /// Best-effort by contract: the store mutation already succeeded, so the
    /// caller's request must not fail because a socket somewhere is slow.
    async fn publish_room_update(&self, room: &Room) {
        let snapshot = match serde_json::to_value(RoomResponse::from(room)) {
            Ok(value) => value,
            Err(err) => {
                warn!(room = %room.id, error = %err, "room snapshot serialization failed");
                return;
            }
        };

        let event = RoomEvent::room_update(room.id.as_str(), snapshot);
        let delivered = self.broadcaster.broadcast(&room.id, &event).await;

        trace!(room = %room.id, delivered, "room update published");
    }
}

impl std::fmt::Debug for RoomService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RoomService")
            .field("broadcaster", &self.broadcaster)
            .finish()
    }
}
