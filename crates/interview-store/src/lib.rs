//! # interview-store
//!
//! Room record storage. The [`RoomStore`] trait is the port the service layer
//! talks to; [`MemoryRoomStore`] is the in-process implementation backing a
//! single-node deployment.

pub mod error;
pub mod memory;
pub mod store;

pub use error::StoreError;
pub use memory::MemoryRoomStore;
pub use store::{ParticipantRemoval, RoomStore, StoreResult};
