//! Health check endpoints
//!
//! `GET /` is the liveness check callers already depend on; `GET /health`
//! adds version and uptime for monitoring.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::server::state::AppState;

/// Fixed liveness text returned by `GET /`
pub const LIVENESS_MESSAGE: &str = "Groq API server is running";

/// Response for the root liveness endpoint
#[derive(Debug, Serialize, Deserialize)]
pub struct LivenessResponse {
    pub message: String,
}

/// Response for the detailed health endpoint
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub environment: String,
    pub uptime_seconds: u64,
    pub credential_configured: bool,
}

/// Liveness endpoint
///
/// Always succeeds and never touches upstream or the credential.
///
/// GET /
pub async fn root() -> Json<LivenessResponse> {
    Json(LivenessResponse {
        message: LIVENESS_MESSAGE.to_string(),
    })
}

/// Health check endpoint
///
/// GET /health
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: state.settings.app_version.clone(),
        environment: state.settings.environment.to_string(),
        uptime_seconds: state.uptime_seconds(),
        credential_configured: state.settings.groq.has_api_key(),
    })
}
