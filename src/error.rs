//! HTTP-facing error type.
//!
//! Every failure leaving a handler is rendered as the service's JSON envelope:
//!
//! ```json
//! { "status": "Error", "error": "invalid url" }
//! ```

use axum::{
    Json,
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

use crate::domain::error::ShortenerError;

/// Response status value for failures.
pub const STATUS_ERROR: &str = "Error";

/// Envelope returned for every error response.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub status: &'static str,
    pub error: String,
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Unauthorized(String),

    #[error("{0}")]
    Unavailable(String),

    #[error("{0}")]
    Internal(String),
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::Unauthorized(message.into())
    }

    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::Unavailable(message.into())
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    /// HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            AppError::Unavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Translates core errors into client-visible messages.
///
/// Client errors are logged at debug level. Store and allocation failures are
/// logged as errors with their full context and replaced by an opaque message.
impl From<ShortenerError> for AppError {
    fn from(e: ShortenerError) -> Self {
        if e.is_client_error() {
            tracing::debug!(error = %e, "rejected request");
        } else {
            tracing::error!(error = %e, "request failed");
        }

        match e {
            ShortenerError::EmptyUrl => AppError::bad_request("url is required"),
            ShortenerError::InvalidUrl(_) => AppError::bad_request("invalid url"),
            ShortenerError::NotFound => AppError::not_found("url not found"),
            ShortenerError::Unavailable(_) => AppError::unavailable("service unavailable"),
            _ => AppError::internal("internal error"),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let unauthorized = matches!(self, AppError::Unauthorized(_));

        let body = ErrorBody {
            status: STATUS_ERROR,
            error: self.to_string(),
        };

        let mut response = (status, Json(body)).into_response();

        if unauthorized {
            response.headers_mut().insert(
                header::WWW_AUTHENTICATE,
                HeaderValue::from_static(r#"Basic realm="url-shortener""#),
            );
        }

        response
    }
}
