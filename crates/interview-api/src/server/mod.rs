//! Server setup and initialization
//!
//! Provides the main application builder and server runner.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use interview_common::{AppConfig, AppError};
use interview_gateway::{Broadcaster, RoomRegistry};
use interview_service::RoomService;
use interview_store::MemoryRoomStore;
use tokio::net::TcpListener;
use tracing::info;

use crate::middleware::apply_middleware;
use crate::routes::create_router;
use crate::state::AppState;

/// Build the complete Axum application with all routes and middleware
pub fn create_app(state: AppState) -> Router {
    let router = create_router();
    let router = apply_middleware(
        router,
        &state.config().cors,
        state.config().app.env.is_production(),
    );
    router.with_state(state)
}

/// Initialize all dependencies and create AppState
///
/// Everything lives in process memory: the room store, the connection
/// registry, and the broadcaster that ties mutations to subscribers.
pub fn create_app_state(config: AppConfig) -> AppState {
    let store = MemoryRoomStore::shared();
    let registry = RoomRegistry::new_shared();
    let broadcaster = Arc::new(
        Broadcaster::new(Arc::clone(&registry))
            .with_send_timeout(config.realtime.send_timeout()),
    );
    let service = RoomService::new(store, broadcaster);

    AppState::new(service, registry, config)
}

/// Run the HTTP server
pub async fn run_server(app: Router, addr: SocketAddr) -> Result<(), AppError> {
    info!("Starting HTTP server on {}", addr);

    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| AppError::Config(format!("Failed to bind to {}: {}", addr, e)))?;

    info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .await
        .map_err(|e| AppError::Config(format!("Server error: {}", e)))?;

    Ok(())
}

/// Run the complete server with configuration
pub async fn run(config: AppConfig) -> Result<(), AppError> {
    let addr = config
        .server
        .address()
        .parse::<SocketAddr>()
        .map_err(|e| AppError::Config(format!("Invalid server address: {}", e)))?;

    // Create app state
    let state = create_app_state(config);

    // Build application
    let app = create_app(state);

    // Run server
    run_server(app, addr).await
}
