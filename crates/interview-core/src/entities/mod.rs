//! Domain entities

mod participant;
mod room;

pub use participant::Participant;
pub use room::Room;
