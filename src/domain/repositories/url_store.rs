//! Storage capability set for short links.

use crate::domain::entities::UrlRecord;
use crate::domain::error::ShortenerResult;
use async_trait::async_trait;

/// Durable mapping from short code to [`UrlRecord`], with click accounting.
///
/// Implementations must be safe to call concurrently without external
/// locking: uniqueness of `short_code` and click increments are delegated to
/// the backing engine's own atomic primitives.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgUrlStore`] - PostgreSQL implementation
/// - [`crate::infrastructure::persistence::MemoryUrlStore`] - in-process implementation
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/store_postgres.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UrlStore: Send + Sync {
    /// Inserts a new record with `clicks = 0`.
    ///
    /// # Errors
    ///
    /// Returns [`ShortenerError::DuplicateCode`] if `short_code` is taken.
    /// Returns [`ShortenerError::ConstraintViolation`] for other integrity errors.
    /// Returns [`ShortenerError::Unavailable`] if the store cannot be reached or was closed.
    ///
    /// [`ShortenerError::DuplicateCode`]: crate::domain::error::ShortenerError::DuplicateCode
    /// [`ShortenerError::ConstraintViolation`]: crate::domain::error::ShortenerError::ConstraintViolation
    /// [`ShortenerError::Unavailable`]: crate::domain::error::ShortenerError::Unavailable
    async fn save(&self, original_url: &str, short_code: &str) -> ShortenerResult<()>;

    /// Returns the original URL for `short_code` and counts one click.
    ///
    /// The counter update is best-effort: if it fails, the failure is logged
    /// and the URL is still returned.
    ///
    /// # Errors
    ///
    /// Returns [`ShortenerError::NotFound`] if no record matches.
    ///
    /// [`ShortenerError::NotFound`]: crate::domain::error::ShortenerError::NotFound
    async fn resolve(&self, short_code: &str) -> ShortenerResult<String>;

    /// Returns the current click count for `short_code`.
    ///
    /// # Errors
    ///
    /// Returns [`ShortenerError::NotFound`] if no record matches.
    ///
    /// [`ShortenerError::NotFound`]: crate::domain::error::ShortenerError::NotFound
    async fn stats(&self, short_code: &str) -> ShortenerResult<i64>;

    /// Looks up the full record without counting a click.
    async fn find(&self, short_code: &str) -> ShortenerResult<Option<UrlRecord>>;

    /// Checks that the backing engine is reachable.
    async fn ping(&self) -> ShortenerResult<()>;

    /// Releases all held connections.
    ///
    /// Every later call on the store fails with
    /// [`ShortenerError::Unavailable`](crate::domain::error::ShortenerError::Unavailable).
    async fn close(&self);
}
