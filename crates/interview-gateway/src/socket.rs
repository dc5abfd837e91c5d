//! WebSocket session loop
//!
//! Owns one upgraded socket from registration to teardown. Inbound text
//! frames steer the connection's subscriptions; outbound frames arrive on the
//! connection's channel and are written to the socket in order by a dedicated
//! writer task. Whichever side finishes first tears the whole session down,
//! and teardown always unregisters the connection so no subscription
//! outlives its socket.

use std::sync::Arc;

use axum::extract::ws::{Message, WebSocket};
use futures_util::{SinkExt, StreamExt};
use tokio::sync::mpsc;
use tracing::{debug, info, trace};

use crate::connection::ConnectionId;
use crate::protocol::{ControlCommand, ControlFrame};
use crate::registry::RoomRegistry;

/// Default per-connection outbound queue depth
pub const DEFAULT_OUTBOUND_BUFFER: usize = 128;

/// Drive one WebSocket connection until either side hangs up
pub async fn handle_socket(socket: WebSocket, registry: Arc<RoomRegistry>, outbound_buffer: usize) {
    let (tx, mut rx) = mpsc::channel::<Arc<str>>(outbound_buffer);
    let connection = registry.register(tx);
    let connection_id = connection.id();

    info!(connection_id = %connection_id, "WebSocket connection established");

    let (mut ws_sink, mut ws_stream) = socket.split();

    // Writer: drain the outbound queue onto the socket, preserving order.
    let mut send_task = tokio::spawn(async move {
        while let Some(frame) = rx.recv().await {
            if ws_sink.send(Message::Text(frame.to_string())).await.is_err() {
                break;
            }
        }
        let _ = ws_sink.close().await;
    });

    // Reader: apply control frames until the client goes away.
    let recv_registry = Arc::clone(&registry);
    let mut recv_task = tokio::spawn(async move {
        while let Some(msg) = ws_stream.next().await {
            match msg {
                Ok(Message::Text(text)) => {
                    apply_control_frame(&recv_registry, connection_id, &text);
                }
                Ok(Message::Binary(_)) => {
                    debug!(connection_id = %connection_id, "ignoring binary frame");
                }
                Ok(Message::Ping(_) | Message::Pong(_)) => {
                    // Handled at the transport level.
                }
                Ok(Message::Close(_)) => {
                    debug!(connection_id = %connection_id, "client closed connection");
                    break;
                }
                Err(err) => {
                    debug!(connection_id = %connection_id, error = %err, "WebSocket error");
                    break;
                }
            }
        }
    });

    // Either task finishing means the session is over.
    tokio::select! {
        _ = &mut send_task => recv_task.abort(),
        _ = &mut recv_task => send_task.abort(),
    }

    registry.remove(connection_id);

    info!(connection_id = %connection_id, "WebSocket connection closed");
}

/// Apply one inbound text frame to the registry.
///
/// Nothing a client sends can fail the session: malformed JSON and
/// non-actionable frames are logged and dropped.
fn apply_control_frame(registry: &RoomRegistry, connection_id: ConnectionId, text: &str) {
    let frame = match ControlFrame::from_json(text) {
        Ok(frame) => frame,
        Err(err) => {
            debug!(
                connection_id = %connection_id,
                error = %err,
                "ignoring malformed control frame"
            );
            return;
        }
    };

    match frame.into_command() {
        ControlCommand::Subscribe(room) => {
            registry.subscribe(connection_id, &room);
        }
        ControlCommand::Unsubscribe(room) => {
            registry.unsubscribe(connection_id, &room);
        }
        ControlCommand::Ignore => {
            trace!(connection_id = %connection_id, "ignoring non-actionable control frame");
        }
    }
}
