//! Room key - short, shareable, case-insensitive room identifier
//!
//! Keys are stored and compared in a single canonical form (ASCII uppercase),
//! so `abc123`, `ABC123`, and `aBc123` all name the same room. Normalization
//! happens exactly once, when the raw string enters the domain.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

use crate::error::DomainError;

/// Canonical identifier for a collaborative room
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RoomKey(String);

impl RoomKey {
    /// Length of generated keys
    pub const GENERATED_LEN: usize = 6;

    /// Alphabet for generated keys (unambiguous in the canonical form)
    const CHARSET: &'static [u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

    /// Normalize a raw string into a canonical room key.
    ///
    /// Leading/trailing whitespace is stripped and the remainder is
    /// uppercased. Only empty (or all-whitespace) input is rejected; keys
    /// arriving from clients are otherwise taken as-is so that lookups with
    /// unknown keys fall through to "not found" rather than "bad request".
    pub fn parse(raw: &str) -> Result<Self, DomainError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(DomainError::EmptyRoomKey);
        }
        Ok(Self(trimmed.to_ascii_uppercase()))
    }

    /// Generate a new random key (6 characters, A-Z and 0-9)
    pub fn generate() -> Self {
        use rand::Rng;

        let mut rng = rand::thread_rng();
        let key: String = (0..Self::GENERATED_LEN)
            .map(|_| {
                let idx = rng.gen_range(0..Self::CHARSET.len());
                Self::CHARSET[idx] as char
            })
            .collect();
        Self(key)
    }

    /// Canonical (uppercase) form of the key
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the key, returning the canonical string
    #[inline]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for RoomKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for RoomKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::str::FromStr for RoomKey {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RoomKey::parse(s)
    }
}

impl Serialize for RoomKey {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

// Deserialization goes through `parse` so keys are canonical no matter how
// they enter the system.
impl<'de> Deserialize<'de> for RoomKey {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        RoomKey::parse(&raw).map_err(serde::de::Error::custom)
    }
}
