//! WebSocket upgrade handler
//!
//! Upgrades GET /ws requests and hands the socket to the gateway loop.

use std::sync::Arc;

use axum::{
    extract::{State, WebSocketUpgrade},
    response::IntoResponse,
};
use interview_gateway::handle_socket;

use crate::state::AppState;

/// WebSocket endpoint for room subscriptions
///
/// GET /ws
pub async fn room_socket(
    State(state): State<AppState>,
    ws: WebSocketUpgrade,
) -> impl IntoResponse {
    let registry = Arc::clone(state.registry());
    let outbound_buffer = state.config().realtime.outbound_buffer;
    ws.on_upgrade(move |socket| handle_socket(socket, registry, outbound_buffer))
}
