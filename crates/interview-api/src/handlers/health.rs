//! Health check handler
//!
//! Endpoint for liveness probes.

use axum::Json;
use interview_service::HealthResponse;

/// Basic health check (liveness probe)
///
/// GET /health
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
