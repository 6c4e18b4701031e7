//! Handler for link shortening endpoint.

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::{HeaderMap, Uri, header},
};
use tracing::debug;

use crate::api::dto::shorten::{ShortenRequest, ShortenResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Creates a short link for a long URL.
///
/// # Endpoint
///
/// `POST /url` (basic auth)
///
/// # Request Body
///
/// ```json
/// { "url": "https://example.com/some/long/path" }
/// ```
///
/// # Response
///
/// ```json
/// { "status": "OK", "short_url": "http://localhost:8082/aB3dE5gH7j" }
/// ```
///
/// The short URL's base is `BASE_URL` when configured, otherwise
/// `http://{host}` of the incoming request. The host comes from the `Host`
/// header, or from the request URI's authority for HTTP/2 requests that
/// carry no `Host` header.
///
/// # Errors
///
/// - 400 `invalid request` for a malformed body
/// - 400 `url is required` / `invalid url` for bad input
/// - 500 `internal error` if no unique code could be stored
/// - 503 `service unavailable` if the store is unreachable
pub async fn shorten_handler(
    State(state): State<AppState>,
    uri: Uri,
    headers: HeaderMap,
    payload: Result<Json<ShortenRequest>, JsonRejection>,
) -> Result<Json<ShortenResponse>, AppError> {
    let Json(payload) = payload.map_err(|rejection| {
        debug!(error = %rejection, "failed to decode request");
        AppError::bad_request("invalid request")
    })?;

    let base_url = resolve_base_url(&state, &uri, &headers)?;

    let code = state
        .shortener_service
        .create(&payload.url)
        .await?;

    let short_url = state.shortener_service.short_url(&base_url, &code);

    Ok(Json(ShortenResponse::ok(short_url)))
}

/// Picks the public base for short links.
fn resolve_base_url(state: &AppState, uri: &Uri, headers: &HeaderMap) -> Result<String, AppError> {
    if let Some(base_url) = &state.base_url {
        return Ok(base_url.to_string());
    }

    let host = headers
        .get(header::HOST)
        .and_then(|v| v.to_str().ok())
        .filter(|v| !v.is_empty())
        .map(str::to_string)
        .or_else(|| authority_host(uri))
        .ok_or_else(|| AppError::bad_request("missing host header"))?;

    Ok(format!("http://{}", host))
}

/// `host[:port]` of an absolute request URI, without any userinfo.
fn authority_host(uri: &Uri) -> Option<String> {
    let host = uri.host().filter(|h| !h.is_empty())?;
    Some(match uri.port_u16() {
        Some(port) => format!("{}:{}", host, port),
        None => host.to_string(),
    })
}
