//! Participant entity - one person present in a room

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Participant in a collaborative room
///
/// People can join a room without identifying themselves; such participants
/// simply carry no name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Participant {
    pub id: String,
    pub name: Option<String>,
    pub joined_at: DateTime<Utc>,
}

impl Participant {
    /// Create a new participant with a fresh random id
    pub fn new(name: Option<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name,
            joined_at: Utc::now(),
        }
    }

    /// Create a participant that did not give a name
    pub fn anonymous() -> Self {
        Self::new(None)
    }

    /// Check if the participant joined without a name
    #[inline]
    pub fn is_anonymous(&self) -> bool {
        self.name.is_none()
    }
}
