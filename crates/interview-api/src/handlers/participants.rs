//! Participant handlers
//!
//! Endpoints for the participant roster of a room.

use axum::{
    extract::{Path, State},
    Json,
};
use interview_service::{AddParticipantRequest, ParticipantResponse};

use crate::extractors::OptionalValidatedJson;
use crate::handlers::rooms::parse_room_key;
use crate::response::{ApiResult, Created, NoContent};
use crate::state::AppState;

/// List participants in a room
///
/// GET /rooms/{room_id}/participants
pub async fn list_participants(
    State(state): State<AppState>,
    Path(room_id): Path<String>,
) -> ApiResult<Json<Vec<ParticipantResponse>>> {
    let key = parse_room_key(&room_id)?;
    let response = state.service().list_participants(&key).await?;
    Ok(Json(response))
}

/// Add a participant to a room
///
/// POST /rooms/{room_id}/participants
pub async fn add_participant(
    State(state): State<AppState>,
    Path(room_id): Path<String>,
    OptionalValidatedJson(request): OptionalValidatedJson<AddParticipantRequest>,
) -> ApiResult<Created<Json<ParticipantResponse>>> {
    let key = parse_room_key(&room_id)?;
    let response = state
        .service()
        .add_participant(&key, request.unwrap_or_default())
        .await?;
    Ok(Created(Json(response)))
}

/// Remove a participant from a room
///
/// DELETE /rooms/{room_id}/participants/{participant_id}
pub async fn remove_participant(
    State(state): State<AppState>,
    Path((room_id, participant_id)): Path<(String, String)>,
) -> ApiResult<NoContent> {
    let key = parse_room_key(&room_id)?;
    state
        .service()
        .remove_participant(&key, &participant_id)
        .await?;
    Ok(NoContent)
}
