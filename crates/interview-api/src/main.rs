//! Interview API server entry point
//!
//! Run with:
//! ```bash
//! cargo run -p interview-api
//! ```
//!
//! Configuration is loaded from environment variables (a `.env` file is
//! honored when present).

use interview_common::{try_init_tracing_with_config, AppConfig, TracingConfig};
use tracing::{error, info};

#[tokio::main]
async fn main() {
    // Load configuration before tracing so the log format can follow the
    // environment; failures at this point can only go to stderr.
    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    // Initialize tracing
    let tracing_config = TracingConfig::for_environment(config.app.env);
    if let Err(e) = try_init_tracing_with_config(tracing_config) {
        eprintln!("Warning: Failed to initialize tracing: {}", e);
    }

    info!(
        name = %config.app.name,
        env = ?config.app.env,
        addr = %config.server.address(),
        "Configuration loaded"
    );

    // Run the server
    if let Err(e) = interview_api::run(config).await {
        error!(error = %e, "Server failed to start");
        std::process::exit(1);
    }
}
