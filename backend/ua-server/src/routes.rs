use crate::{AppState, create_user, get_user, health, list_users, request_logging};

use std::time::Duration;

use axum::{Router, http::Method, middleware, routing::get};
use tower_http::cors::{Any, CorsLayer};

const CORS_MAX_AGE_SECS: u64 = 60;

/// Build the application router with all endpoints
pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Health check endpoints
        .route("/health", get(health::health))
        .route("/ready", get(health::readiness))
        // Users
        .route("/users", get(list_users).post(create_user))
        .route("/users/{id}", get(get_user))
        .with_state(state)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods([Method::GET, Method::POST])
                .allow_headers(Any)
                .max_age(Duration::from_secs(CORS_MAX_AGE_SECS)),
        )
        // Outermost, so CORS preflights are logged too
        .layer(middleware::from_fn(request_logging::log_request))
}
