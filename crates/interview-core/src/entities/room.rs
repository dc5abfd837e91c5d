//! Room entity - a shared coding session

use chrono::{DateTime, Utc};

use crate::entities::Participant;
use crate::value_objects::{Language, RoomKey};

/// Collaborative room holding the shared editor state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Room {
    pub id: RoomKey,
    pub code: String,
    pub language: Language,
    pub created_at: DateTime<Utc>,
    pub participants: Vec<Participant>,
}

impl Room {
    /// Create a new room seeded with the language's starter code.
    ///
    /// The creator counts as the first participant and joins anonymously.
    pub fn new(id: RoomKey, language: Language) -> Self {
        Self {
            id,
            code: language.starter_code().to_string(),
            language,
            created_at: Utc::now(),
            participants: vec![Participant::anonymous()],
        }
    }

    /// Number of people currently in the room
    #[inline]
    pub fn participant_count(&self) -> usize {
        self.participants.len()
    }

    /// Add a participant, returning a copy of the new entry
    pub fn add_participant(&mut self, name: Option<String>) -> Participant {
        let participant = Participant::new(name);
        self.participants.push(participant.clone());
        participant
    }

    /// Record an anonymous join
    pub fn join(&mut self) -> Participant {
        self.add_participant(None)
    }

    /// Record an anonymous leave.
    ///
    /// Removes the most recently joined anonymous participant. Named
    /// participants are only removed explicitly by id, so an all-named room
    /// is left untouched. Returns whether anyone was removed.
    pub fn leave(&mut self) -> bool {
        let last_anonymous = self
            .participants
            .iter()
            .rposition(Participant::is_anonymous);
        match last_anonymous {
            Some(idx) => {
                self.participants.remove(idx);
                true
            }
            None => false,
        }
    }

    /// Remove a participant by id, returning whether it was present
    pub fn remove_participant(&mut self, participant_id: &str) -> bool {
        let before = self.participants.len();
        self.participants.retain(|p| p.id != participant_id);
        self.participants.len() != before
    }

    /// Replace the shared code
    pub fn set_code(&mut self, code: String) {
        self.code = code;
    }

    /// Switch the editor language, leaving the code untouched
    pub fn set_language(&mut self, language: Language) {
        self.language = language;
    }
}
