use crate::AppState;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use log::warn;

/// GET /health - liveness, no dependencies checked
pub async fn health() -> &'static str {
    "Working!"
}

/// GET /ready - readiness probe (can we reach the database?)
pub async fn readiness(State(state): State<AppState>) -> Response {
    match state.store.health_check().await {
        Ok(()) => (StatusCode::OK, "Ready").into_response(),
        Err(e) => {
            warn!("Readiness check failed: {}", e);
            (StatusCode::SERVICE_UNAVAILABLE, "Database unavailable").into_response()
        }
    }
}
