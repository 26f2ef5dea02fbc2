use crate::{AppState, dto::HealthResponse};
use axum::{Json, extract::State};
use tracing::debug;

/// GET /health
/// Response: 200 OK with JSON `{ "status": "ok", "timestamp": "..." }`
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let response = HealthResponse::ok(state.clock.now());

    debug!(timestamp = %response.timestamp, "Health check requested");

    Json(response)
}
