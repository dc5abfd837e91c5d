//! Axum extractors for request handling
//!
//! Custom extractors for validated JSON bodies.

mod validated;

pub use validated::{OptionalValidatedJson, ValidatedJson};
