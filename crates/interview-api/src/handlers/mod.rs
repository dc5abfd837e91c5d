//! Route handlers
//!
//! All HTTP and WebSocket request handlers organized by domain.

pub mod health;
pub mod participants;
pub mod rooms;
pub mod socket;
