//! # interview-core
//!
//! Domain layer containing entities, value objects, and domain errors.
//! This crate has zero dependencies on infrastructure (web framework, realtime
//! transport, etc.).

pub mod entities;
pub mod error;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{Participant, Room};
pub use error::DomainError;
pub use value_objects::{Language, RoomKey};
