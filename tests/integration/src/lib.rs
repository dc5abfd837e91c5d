//! Integration test utilities for the interview server
//!
//! This crate provides helpers for running end-to-end tests against
//! the REST API and the realtime WebSocket endpoint.

pub mod fixtures;
pub mod helpers;

pub use fixtures::*;
pub use helpers::*;
