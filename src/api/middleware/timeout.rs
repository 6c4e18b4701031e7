//! Per-request deadline.

use axum::http::StatusCode;
use std::time::Duration;
use tower_http::timeout::TimeoutLayer;

/// Answers `408 Request Timeout` for requests still running after `timeout`.
///
/// The handler future is dropped at the deadline, so a slow store call never
/// holds a connection longer than `HTTP_TIMEOUT`.
pub fn layer(timeout: Duration) -> TimeoutLayer {
    TimeoutLayer::with_status_code(StatusCode::REQUEST_TIMEOUT, timeout)
}
