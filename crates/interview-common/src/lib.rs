//! # interview-common
//!
//! Shared infrastructure: configuration, application errors, and telemetry.
//! Every other crate in the workspace builds on top of this one.

pub mod config;
pub mod error;
pub mod telemetry;

// Re-export commonly used types at crate root
pub use config::{AppConfig, ConfigError, CorsConfig, Environment, RealtimeConfig, ServerConfig};
pub use error::{AppError, AppResult, ErrorResponse};
pub use telemetry::{init_tracing, try_init_tracing, try_init_tracing_with_config, TracingConfig};
