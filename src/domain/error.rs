//! Error taxonomy shared by the store and the shortening service.

use thiserror::Error;

/// Failures produced by the core shortening path.
///
/// The variants split into three groups:
///
/// - **Input errors** ([`EmptyUrl`](Self::EmptyUrl), [`InvalidUrl`](Self::InvalidUrl)):
///   caused by the caller, returned immediately and never retried.
/// - **Allocation errors** ([`DuplicateCode`](Self::DuplicateCode),
///   [`AllocationExhausted`](Self::AllocationExhausted)): a generated code
///   collided with an existing one. The service retries the former internally
///   and reports the latter once the retry budget is spent.
/// - **Store errors** ([`NotFound`](Self::NotFound),
///   [`ConstraintViolation`](Self::ConstraintViolation),
///   [`Unavailable`](Self::Unavailable), [`Storage`](Self::Storage)).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShortenerError {
    #[error("url is empty")]
    EmptyUrl,

    #[error("invalid url: {0}")]
    InvalidUrl(String),

    #[error("short code already exists")]
    DuplicateCode,

    #[error("failed to allocate a unique short code after {attempts} attempts")]
    AllocationExhausted { attempts: usize },

    #[error("url not found")]
    NotFound,

    #[error("constraint violation: {0}")]
    ConstraintViolation(String),

    #[error("storage unavailable: {0}")]
    Unavailable(String),

    #[error("storage error: {0}")]
    Storage(String),
}

impl ShortenerError {
    /// Returns true if the operation may succeed when repeated with a fresh code.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::DuplicateCode)
    }

    /// Returns true for errors caused by the caller's input.
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::EmptyUrl | Self::InvalidUrl(_) | Self::NotFound)
    }
}

pub type ShortenerResult<T> = Result<T, ShortenerError>;
