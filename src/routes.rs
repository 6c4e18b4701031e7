//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /{code}`             - Short link redirect (public)
//! - `GET  /health`             - Health check (public)
//! - `POST /url`                - Create short link (basic auth)
//! - `GET  /url/{code}/stats`   - Link statistics (basic auth)
//!
//! # Middleware
//!
//! - **Request ID** - `x-request-id` assigned and echoed back
//! - **Timeout** - 408 once a request exceeds `HTTP_TIMEOUT`
//! - **Tracing** - Structured request/response logging
//! - **Authentication** - HTTP basic auth on link management routes
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::{health_handler, redirect_handler};
use crate::api::middleware::{auth, request_id, timeout, tracing};
use crate::state::AppState;
use axum::routing::get;
use axum::{Router, middleware};
use std::time::Duration;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the router with all routes and middleware, without path normalization.
///
/// Requests running longer than `request_timeout` are answered with 408.
pub fn router(state: AppState, request_timeout: Duration) -> Router {
    let api_router = api::routes::protected_routes()
        .route_layer(middleware::from_fn_with_state(state.clone(), auth::layer));

    Router::new()
        .route("/{code}", get(redirect_handler))
        .route("/health", get(health_handler))
        .merge(api_router)
        .with_state(state)
        .layer(timeout::layer(request_timeout))
        .layer(request_id::propagate_layer())
        .layer(tracing::layer())
        .layer(request_id::set_layer())
}

/// Constructs the application service: [`router`] with trailing slashes trimmed
/// before routing.
pub fn app_router(state: AppState, request_timeout: Duration) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(router(state, request_timeout))
}
