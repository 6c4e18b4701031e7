//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use tracing::{debug, error};

use crate::error::AppError;
use crate::state::AppState;
use crate::utils::code_generator::is_valid_code;

/// Redirects a short code to its original URL.
///
/// # Endpoint
///
/// `GET /{code}`
///
/// # Request Flow
///
/// 1. Reject codes that cannot have been generated (404, no store access)
/// 2. Resolve the code, counting one click
/// 3. Return 302 Found with the original URL in `Location`
///
/// # Errors
///
/// Returns 404 Not Found if the short code doesn't exist.
pub async fn redirect_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<Response, AppError> {
    if !is_valid_code(&code) {
        debug!(short_code = %code, "malformed short code");
        return Err(AppError::not_found("url not found"));
    }

    let original_url = state.shortener_service.redirect(&code).await?;

    let location = HeaderValue::try_from(original_url.as_str()).map_err(|e| {
        error!(short_code = %code, error = %e, "stored url is not a valid Location header");
        AppError::internal("internal error")
    })?;

    debug!(short_code = %code, url = %original_url, "redirecting");

    Ok((StatusCode::FOUND, [(header::LOCATION, location)]).into_response())
}
