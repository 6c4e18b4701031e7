//! API route configuration.
//!
//! Link management endpoints require basic authentication via
//! [`crate::api::middleware::auth`].

use crate::api::handlers::{shorten_handler, stats_handler};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// Routes protected by basic authentication.
///
/// # Endpoints
///
/// - `POST /url`               - Create a short link
/// - `GET  /url/{code}/stats`  - Click statistics for a short link
pub fn protected_routes() -> Router<AppState> {
    Router::new()
        .route("/url", post(shorten_handler))
        .route("/url/{code}/stats", get(stats_handler))
}
