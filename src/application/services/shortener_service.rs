//! Short link creation and resolution service.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::domain::entities::UrlRecord;
use crate::domain::error::{ShortenerError, ShortenerResult};
use crate::domain::repositories::UrlStore;
use crate::utils::code_generator::{SHORT_CODE_LENGTH, generate_code};
use crate::utils::url_validator::validate_url;

/// Default number of codes tried before giving up on a collision streak.
pub const DEFAULT_MAX_ATTEMPTS: usize = 5;

/// Tunables for [`ShortenerService`].
#[derive(Debug, Clone)]
pub struct ShortenerSettings {
    /// Length of generated short codes.
    pub code_length: usize,
    /// Upper bound on `save` attempts per `create` call.
    pub max_attempts: usize,
}

impl Default for ShortenerSettings {
    fn default() -> Self {
        Self {
            code_length: SHORT_CODE_LENGTH,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }
}

/// Validates input URLs, allocates short codes and resolves them back.
///
/// The service is stateless apart from its store handle, so one instance is
/// shared by all request handlers.
pub struct ShortenerService {
    store: Arc<dyn UrlStore>,
    settings: ShortenerSettings,
}

impl ShortenerService {
    /// Creates a new shortener service.
    pub fn new(store: Arc<dyn UrlStore>, settings: ShortenerSettings) -> Self {
        Self { store, settings }
    }

    /// Shortens `original_url` and returns the allocated short code.
    ///
    /// # Code Allocation
    ///
    /// A random candidate is generated and saved. If the store reports the
    /// code as taken, a new candidate is generated, up to
    /// [`ShortenerSettings::max_attempts`] times in total.
    ///
    /// # Errors
    ///
    /// - [`ShortenerError::EmptyUrl`] if the input is empty or whitespace
    /// - [`ShortenerError::InvalidUrl`] if the input is not an absolute URI
    /// - [`ShortenerError::AllocationExhausted`] if every candidate collided
    /// - store errors other than [`ShortenerError::DuplicateCode`] are returned as-is
    pub async fn create(&self, original_url: &str) -> ShortenerResult<String> {
        let original_url = validate_url(original_url)?;

        for attempt in 1..=self.settings.max_attempts {
            let code = generate_code(self.settings.code_length);

            match self.store.save(original_url, &code).await {
                Ok(()) => {
                    info!(short_code = %code, url = original_url, "url saved");
                    return Ok(code);
                }
                Err(e) if e.is_retryable() => {
                    debug!(short_code = %code, attempt, "short code collision, retrying");
                }
                Err(e) => return Err(e),
            }
        }

        warn!(
            attempts = self.settings.max_attempts,
            "giving up on short code allocation"
        );
        Err(ShortenerError::AllocationExhausted {
            attempts: self.settings.max_attempts,
        })
    }

    /// Returns the original URL behind `short_code`, counting one click.
    ///
    /// # Errors
    ///
    /// Returns [`ShortenerError::NotFound`] if the code is unknown.
    pub async fn redirect(&self, short_code: &str) -> ShortenerResult<String> {
        self.store.resolve(short_code).await
    }

    /// Returns the number of times `short_code` has been resolved.
    ///
    /// # Errors
    ///
    /// Returns [`ShortenerError::NotFound`] if the code is unknown.
    pub async fn stats(&self, short_code: &str) -> ShortenerResult<i64> {
        self.store.stats(short_code).await
    }

    /// Returns the full record for `short_code` without counting a click.
    ///
    /// # Errors
    ///
    /// Returns [`ShortenerError::NotFound`] if the code is unknown.
    pub async fn details(&self, short_code: &str) -> ShortenerResult<UrlRecord> {
        self.store
            .find(short_code)
            .await?
            .ok_or(ShortenerError::NotFound)
    }

    /// Checks store connectivity.
    pub async fn health_check(&self) -> ShortenerResult<()> {
        self.store.ping().await
    }

    /// Builds the public short link for `code` under `base`.
    pub fn short_url(&self, base: &str, code: &str) -> String {
        format!("{}/{}", base.trim_end_matches('/'), code)
    }
}
