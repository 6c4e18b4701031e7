//! Handler for link statistics.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::api::dto::stats::StatsResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Returns the click count and metadata of a short link.
///
/// Looking at stats does not count as a click.
///
/// # Endpoint
///
/// `GET /url/{code}/stats` (basic auth)
///
/// # Response
///
/// ```json
/// {
///   "status": "OK",
///   "short_code": "aB3dE5gH7j",
///   "original_url": "https://example.com",
///   "clicks": 42,
///   "created_at": "2026-10-15T12:00:00Z"
/// }
/// ```
///
/// # Errors
///
/// Returns 404 Not Found if the short code doesn't exist.
pub async fn stats_handler(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<Json<StatsResponse>, AppError> {
    let record = state.shortener_service.details(&code).await?;
    Ok(Json(StatsResponse::from(record)))
}
