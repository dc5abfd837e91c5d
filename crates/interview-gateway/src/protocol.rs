//! Inbound control protocol
//!
//! Clients steer their subscriptions with small JSON frames:
//!
//! ```json
//! {"action": "subscribe", "roomId": "ABC123"}
//! {"action": "unsubscribe", "roomId": "ABC123"}
//! ```
//!
//! The action set is closed. Anything else - unknown actions, missing fields,
//! unparsable room keys - decodes to something the socket loop silently
//! drops, so a confused client can never take its connection down.

use serde::{Deserialize, Deserializer};

use interview_core::RoomKey;

/// Action named in a control frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ControlAction {
    Subscribe,
    Unsubscribe,
    /// Any action this protocol version does not know
    #[default]
    Unknown,
}

// Unrecognized action names decode to `Unknown` rather than failing the whole
// frame; new actions added on the client side degrade to no-ops here.
impl<'de> Deserialize<'de> for ControlAction {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Ok(match raw.as_str() {
            "subscribe" => Self::Subscribe,
            "unsubscribe" => Self::Unsubscribe,
            _ => Self::Unknown,
        })
    }
}

/// Raw control frame as decoded off the wire
#[derive(Debug, Clone, Deserialize)]
pub struct ControlFrame {
    #[serde(default)]
    pub action: ControlAction,
    #[serde(rename = "roomId", default)]
    pub room_id: Option<String>,
}

impl ControlFrame {
    /// Decode a control frame from a text message
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }

    /// Resolve the frame into something executable.
    ///
    /// Room keys are normalized here, at the boundary; past this point only
    /// canonical keys circulate.
    #[must_use]
    pub fn into_command(self) -> ControlCommand {
        let room = self
            .room_id
            .as_deref()
            .and_then(|raw| RoomKey::parse(raw).ok());

        match (self.action, room) {
            (ControlAction::Subscribe, Some(room)) => ControlCommand::Subscribe(room),
            (ControlAction::Unsubscribe, Some(room)) => ControlCommand::Unsubscribe(room),
            _ => ControlCommand::Ignore,
        }
    }
}

/// What the socket loop should do with a frame
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ControlCommand {
    Subscribe(RoomKey),
    Unsubscribe(RoomKey),
    /// Frame was well-formed JSON but not actionable
    Ignore,
}
