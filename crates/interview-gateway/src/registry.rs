//! Connection registry
//!
//! Tracks every live connection and which rooms each one watches, using
//! concurrent maps for lock-striped access. Room membership lives in two
//! places that must agree: a room -> subscriber-ids index for fan-out, and a
//! per-connection room set for fast teardown. Both sides of an edge are
//! always updated while holding that room's entry lock, so the two views
//! cannot drift apart under concurrent calls.
//!
//! No lock is ever held across an await point, and delivery never happens
//! here; callers take a [`snapshot`](RoomRegistry::snapshot) and send on
//! their own time.

use std::collections::HashSet;
use std::sync::Arc;

use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use tokio::sync::mpsc;
use tracing::{debug, trace};

use interview_core::RoomKey;

use crate::connection::{ConnectionId, RoomConnection};

/// Registry of live connections and their room subscriptions
pub struct RoomRegistry {
    /// Active connections by id
    connections: DashMap<ConnectionId, Arc<RoomConnection>>,

    /// Room key to subscriber-ids index
    rooms: DashMap<RoomKey, HashSet<ConnectionId>>,
}

impl RoomRegistry {
    /// Create a new, empty registry
    #[must_use]
    pub fn new() -> Self {
        Self {
            connections: DashMap::new(),
            rooms: DashMap::new(),
        }
    }

    /// Create a new registry wrapped in Arc
    #[must_use]
    pub fn new_shared() -> Arc<Self> {
        Arc::new(Self::new())
    }

    /// Register a new connection around its outbound channel
    pub fn register(&self, sender: mpsc::Sender<Arc<str>>) -> Arc<RoomConnection> {
        let connection = RoomConnection::new(sender);
        self.connections
            .insert(connection.id(), Arc::clone(&connection));

        debug!(connection_id = %connection.id(), "connection registered");

        connection
    }

    /// Remove a connection and every subscription it holds.
    ///
    /// Idempotent: removing an unknown id is a no-op.
    pub fn remove(&self, id: ConnectionId) {
        let Some((_, connection)) = self.connections.remove(&id) else {
            return;
        };

        for room in connection.clear_rooms() {
            self.drop_member(&room, id);
        }

        debug!(connection_id = %id, "connection removed");
    }

    /// Subscribe a connection to a room.
    ///
    /// Re-subscribing is a no-op; the connection stays a member exactly once.
    /// Returns false when the connection is not registered.
    pub fn subscribe(&self, id: ConnectionId, room: &RoomKey) -> bool {
        let Some(connection) = self.connections.get(&id).map(|c| Arc::clone(&c)) else {
            return false;
        };

        {
            let mut members = self.rooms.entry(room.clone()).or_default();
            members.insert(id);
            connection.track_room(room.clone());
        }

        // A teardown may have raced past while the edge was being written;
        // in that case the membership must be rolled back here, because
        // `remove` read the room set before the edge existed.
        if !self.connections.contains_key(&id) {
            connection.untrack_room(room);
            self.drop_member(room, id);
            return false;
        }

        trace!(connection_id = %id, room = %room, "subscribed");
        true
    }

    /// Unsubscribe a connection from a room.
    ///
    /// Safe to call for rooms the connection never joined. Returns false when
    /// the connection is not registered.
    pub fn unsubscribe(&self, id: ConnectionId, room: &RoomKey) -> bool {
        let Some(connection) = self.connections.get(&id).map(|c| Arc::clone(&c)) else {
            return false;
        };

        match self.rooms.entry(room.clone()) {
            Entry::Occupied(mut occupied) => {
                occupied.get_mut().remove(&id);
                connection.untrack_room(room);
                if occupied.get().is_empty() {
                    occupied.remove();
                }
            }
            Entry::Vacant(_) => connection.untrack_room(room),
        }

        trace!(connection_id = %id, room = %room, "unsubscribed");
        true
    }

    /// Copy the current membership of a room.
    ///
    /// The returned handles are independent of the registry; membership
    /// changes after the copy do not affect them.
    pub fn snapshot(&self, room: &RoomKey) -> Vec<Arc<RoomConnection>> {
        let member_ids: Vec<ConnectionId> = match self.rooms.get(room) {
            Some(members) => members.iter().copied().collect(),
            None => return Vec::new(),
        };

        member_ids
            .iter()
            .filter_map(|id| self.connections.get(id).map(|c| Arc::clone(&c)))
            .collect()
    }

    /// Drop failed subscribers from one room after a delivery pass.
    ///
    /// Only the room edge is cut; the connections stay registered until their
    /// socket tasks notice the closed channel and call [`remove`](Self::remove).
    pub fn prune(&self, room: &RoomKey, dead: &[ConnectionId]) {
        if dead.is_empty() {
            return;
        }

        if let Entry::Occupied(mut occupied) = self.rooms.entry(room.clone()) {
            for id in dead {
                if occupied.get_mut().remove(id) {
                    if let Some(connection) = self.connections.get(id).map(|c| Arc::clone(&c)) {
                        connection.untrack_room(room);
                    }
                }
            }
            if occupied.get().is_empty() {
                occupied.remove();
            }
        }

        debug!(room = %room, pruned = dead.len(), "dead subscribers pruned");
    }

    /// Remove one member from a room's index, deleting the entry when it
    /// empties so idle rooms cost nothing.
    fn drop_member(&self, room: &RoomKey, id: ConnectionId) {
        if let Entry::Occupied(mut occupied) = self.rooms.entry(room.clone()) {
            occupied.get_mut().remove(&id);
            if occupied.get().is_empty() {
                occupied.remove();
            }
        }
    }

    /// Number of subscribers in a room
    pub fn member_count(&self, room: &RoomKey) -> usize {
        self.rooms.get(room).map_or(0, |members| members.len())
    }

    /// Check if a connection is subscribed to a room
    pub fn is_member(&self, room: &RoomKey, id: ConnectionId) -> bool {
        self.rooms
            .get(room)
            .is_some_and(|members| members.contains(&id))
    }

    /// Get the total number of registered connections
    pub fn connection_count(&self) -> usize {
        self.connections.len()
    }

    /// Get the number of rooms with at least one subscriber
    pub fn room_count(&self) -> usize {
        self.rooms.len()
    }

    /// Check if a connection is registered
    pub fn has_connection(&self, id: ConnectionId) -> bool {
        self.connections.contains_key(&id)
    }
}

impl Default for RoomRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for RoomRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RoomRegistry")
            .field("connections", &self.connections.len())
            .field("rooms", &self.rooms.len())
            .finish()
    }
}
