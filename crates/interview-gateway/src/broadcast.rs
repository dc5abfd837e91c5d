//! Room broadcast
//!
//! Fans an event out to every current subscriber of a room. The event is
//! serialized once and the frame shared across deliveries; each delivery is
//! attempted independently, so one slow or dead subscriber never blocks the
//! others or the caller's request path.

use std::sync::Arc;
use std::time::Duration;

use futures_util::future::join_all;
use tracing::{debug, trace, warn};

use interview_core::RoomKey;

use crate::connection::{ConnectionId, SendError};
use crate::events::RoomEvent;
use crate::registry::RoomRegistry;

/// Default upper bound on a single delivery attempt
pub const DEFAULT_SEND_TIMEOUT: Duration = Duration::from_secs(5);

/// Fan-out engine for room events
pub struct Broadcaster {
    registry: Arc<RoomRegistry>,
    send_timeout: Duration,
}

impl Broadcaster {
    /// Create a broadcaster over a registry with the default send timeout
    #[must_use]
    pub fn new(registry: Arc<RoomRegistry>) -> Self {
        Self {
            registry,
            send_timeout: DEFAULT_SEND_TIMEOUT,
        }
    }

    /// Override the per-delivery timeout
    #[must_use]
    pub fn with_send_timeout(mut self, timeout: Duration) -> Self {
        self.send_timeout = timeout;
        self
    }

    /// The registry this broadcaster fans out over
    #[must_use]
    pub fn registry(&self) -> &Arc<RoomRegistry> {
        &self.registry
    }

    /// Deliver an event to every subscriber of a room.
    ///
    /// Membership is captured once up front; connections joining mid-flight
    /// catch the next event. A failed delivery drops that subscriber from
    /// the room (never retried), without disturbing the other deliveries.
    /// Returns the number of successful deliveries; a room with no
    /// subscribers is a successful no-op.
    pub async fn broadcast(&self, room: &RoomKey, event: &RoomEvent) -> usize {
        let targets = self.registry.snapshot(room);
        if targets.is_empty() {
            trace!(room = %room, "no subscribers, nothing to deliver");
            return 0;
        }

        let frame: Arc<str> = match event.to_json() {
            Ok(json) => Arc::from(json.into_boxed_str()),
            Err(err) => {
                warn!(room = %room, error = %err, "event serialization failed, dropping");
                return 0;
            }
        };

        let deliveries = targets.iter().map(|connection| {
            let frame = Arc::clone(&frame);
            async move {
                connection
                    .send(frame, self.send_timeout)
                    .await
                    .err()
                    .map(|err| (connection.id(), err))
            }
        });

        let failures: Vec<(ConnectionId, SendError)> =
            join_all(deliveries).await.into_iter().flatten().collect();

        let delivered = targets.len() - failures.len();

        if !failures.is_empty() {
            for (connection_id, err) in &failures {
                debug!(
                    room = %room,
                    connection_id = %connection_id,
                    error = %err,
                    "delivery failed, dropping subscriber from room"
                );
            }
            let dead: Vec<ConnectionId> = failures.iter().map(|(id, _)| *id).collect();
            self.registry.prune(room, &dead);
        }

        trace!(
            room = %room,
            delivered,
            pruned = failures.len(),
            event_type = %event.event_type,
            "broadcast complete"
        );

        delivered
    }
}

impl std::fmt::Debug for Broadcaster {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Broadcaster")
            .field("registry", &self.registry)
            .field("send_timeout", &self.send_timeout)
            .finish()
    }
}
