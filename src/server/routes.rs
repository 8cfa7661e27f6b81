//! Application routing
//!
//! This module defines all HTTP routes for the relay.

use axum::{http::HeaderName, middleware, routing::get, Router};
use tower_http::cors::{Any, CorsLayer};

use crate::api::{chat, health, models};
use crate::middleware::logging::{log_request, REQUEST_ID_HEADER, TRACE_ID_HEADER};
use crate::server::state::AppState;

/// Create the main application router
pub fn create_router(state: AppState) -> Router {
    // Proxy routes; callers need no credential of their own
    let api_routes = Router::new()
        .route("/chat", get(chat::chat))
        .route("/list-model", get(models::list_models));

    Router::new()
        .route("/", get(health::root))
        .route("/health", get(health::health_check))
        .nest("/api", api_routes)
        // Layer order: last added = outermost = runs first
        .layer(create_cors_layer())
        .layer(middleware::from_fn(log_request))
        .with_state(state)
}

/// Create CORS layer with permissive settings
fn create_cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
        .expose_headers([
            HeaderName::from_static(TRACE_ID_HEADER),
            HeaderName::from_static(REQUEST_ID_HEADER),
        ])
}
