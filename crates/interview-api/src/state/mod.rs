//! Application state
//!
//! Holds the shared state for the Axum application: the room service, the
//! realtime connection registry, and configuration.

use std::sync::Arc;

use interview_common::AppConfig;
use interview_gateway::RoomRegistry;
use interview_service::RoomService;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    /// Room service driving every state change
    service: Arc<RoomService>,
    /// Registry of live WebSocket connections and their subscriptions
    registry: Arc<RoomRegistry>,
    /// Application configuration
    config: Arc<AppConfig>,
}

impl AppState {
    /// Create a new AppState
    pub fn new(service: RoomService, registry: Arc<RoomRegistry>, config: AppConfig) -> Self {
        Self {
            service: Arc::new(service),
            registry,
            config: Arc::new(config),
        }
    }

    /// Get the room service
    pub fn service(&self) -> &RoomService {
        &self.service
    }

    /// Get the connection registry
    pub fn registry(&self) -> &Arc<RoomRegistry> {
        &self.registry
    }

    /// Get the application configuration
    pub fn config(&self) -> &AppConfig {
        &self.config
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("service", &"RoomService")
            .field("registry", &"RoomRegistry")
            .field("config", &"AppConfig")
            .finish()
    }
}
