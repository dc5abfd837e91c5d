//! Value objects - immutable domain primitives

mod language;
mod room_key;

pub use language::Language;
pub use room_key::RoomKey;
