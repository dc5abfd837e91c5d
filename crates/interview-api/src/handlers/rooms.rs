//! Room handlers
//!
//! Endpoints for room lifecycle and shared-state mutation.

use axum::{
    extract::{Path, State},
    Json,
};
use interview_core::RoomKey;
use interview_service::{
    CreateRoomRequest, RoomResponse, UpdateCodeRequest, UpdateLanguageRequest,
};

use crate::extractors::{OptionalValidatedJson, ValidatedJson};
use crate::response::{ApiError, ApiResult, Created, NoContent};
use crate::state::AppState;

/// Create a new room
///
/// POST /rooms
pub async fn create_room(
    State(state): State<AppState>,
    OptionalValidatedJson(request): OptionalValidatedJson<CreateRoomRequest>,
) -> ApiResult<Created<Json<RoomResponse>>> {
    let response = state
        .service()
        .create_room(request.unwrap_or_default())
        .await?;
    Ok(Created(Json(response)))
}

/// Get room by key
///
/// GET /rooms/{room_id}
pub async fn get_room(
    State(state): State<AppState>,
    Path(room_id): Path<String>,
) -> ApiResult<Json<RoomResponse>> {
    let key = parse_room_key(&room_id)?;
    let response = state.service().get_room(&key).await?;
    Ok(Json(response))
}

/// Join a room anonymously
///
/// POST /rooms/{room_id}/join
pub async fn join_room(
    State(state): State<AppState>,
    Path(room_id): Path<String>,
) -> ApiResult<Json<RoomResponse>> {
    let key = parse_room_key(&room_id)?;
    let response = state.service().join_room(&key).await?;
    Ok(Json(response))
}

/// Leave a room
///
/// POST /rooms/{room_id}/leave
pub async fn leave_room(
    State(state): State<AppState>,
    Path(room_id): Path<String>,
) -> ApiResult<NoContent> {
    let key = parse_room_key(&room_id)?;
    state.service().leave_room(&key).await?;
    Ok(NoContent)
}

/// Replace the room's shared code
///
/// PATCH /rooms/{room_id}/code
pub async fn update_code(
    State(state): State<AppState>,
    Path(room_id): Path<String>,
    ValidatedJson(request): ValidatedJson<UpdateCodeRequest>,
) -> ApiResult<Json<RoomResponse>> {
    let key = parse_room_key(&room_id)?;
    let response = state.service().update_code(&key, request).await?;
    Ok(Json(response))
}

/// Switch the room's editor language
///
/// PATCH /rooms/{room_id}/language
pub async fn update_language(
    State(state): State<AppState>,
    Path(room_id): Path<String>,
    ValidatedJson(request): ValidatedJson<UpdateLanguageRequest>,
) -> ApiResult<Json<RoomResponse>> {
    let key = parse_room_key(&room_id)?;
    let response = state.service().update_language(&key, request).await?;
    Ok(Json(response))
}

/// Parse a room key path segment, mapping failures to a 400
pub(crate) fn parse_room_key(room_id: &str) -> Result<RoomKey, ApiError> {
    room_id
        .parse()
        .map_err(|_| ApiError::invalid_path("Invalid room key format"))
}
