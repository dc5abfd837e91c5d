//! Route definitions
//!
//! All routes for the room API, the realtime socket, and health checks.

use axum::{
    routing::{delete, get, patch, post},
    Router,
};

use crate::handlers::{health, participants, rooms, socket};
use crate::state::AppState;

/// Create the main router with all routes
pub fn create_router() -> Router<AppState> {
    Router::new()
        .merge(room_routes())
        .merge(participant_routes())
        .route("/ws", get(socket::room_socket))
        .route("/health", get(health::health_check))
}

/// Room lifecycle and state routes
fn room_routes() -> Router<AppState> {
    Router::new()
        .route("/rooms", post(rooms::create_room))
        .route("/rooms/:room_id", get(rooms::get_room))
        .route("/rooms/:room_id/join", post(rooms::join_room))
        .route("/rooms/:room_id/leave", post(rooms::leave_room))
        .route("/rooms/:room_id/code", patch(rooms::update_code))
        .route("/rooms/:room_id/language", patch(rooms::update_language))
}

/// Participant roster routes
fn participant_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/rooms/:room_id/participants",
            get(participants::list_participants).post(participants::add_participant),
        )
        .route(
            "/rooms/:room_id/participants/:participant_id",
            delete(participants::remove_participant),
        )
}
