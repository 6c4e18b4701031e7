//! PostgreSQL implementation of the URL store.

use async_trait::async_trait;
use sqlx::PgPool;
use sqlx::error::ErrorKind;
use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::domain::entities::UrlRecord;
use crate::domain::error::{ShortenerError, ShortenerResult};
use crate::domain::repositories::UrlStore;

/// Name Postgres gives the unique constraint on `urls.short_code`.
const SHORT_CODE_CONSTRAINT: &str = "urls_short_code_key";

const CREATE_URLS_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS urls (
        id BIGSERIAL PRIMARY KEY,
        original_url TEXT NOT NULL CHECK (original_url <> ''),
        short_code VARCHAR(10) NOT NULL UNIQUE,
        created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
        clicks BIGINT NOT NULL DEFAULT 0 CHECK (clicks >= 0)
    )
"#;

/// PostgreSQL-backed [`UrlStore`].
///
/// Owns the connection pool. Uniqueness is enforced by the `UNIQUE` constraint
/// on `short_code` and clicks are counted with a single `UPDATE ... RETURNING`
/// statement, so concurrent requests never need an in-process lock.
pub struct PgUrlStore {
    pool: Arc<PgPool>,
}

impl PgUrlStore {
    /// Connects to `database_url` with default pool settings and bootstraps the schema.
    ///
    /// # Errors
    ///
    /// Returns [`ShortenerError::Unavailable`] if the database cannot be reached.
    pub async fn connect(database_url: &str) -> ShortenerResult<Self> {
        let pool = PgPool::connect(database_url)
            .await
            .map_err(map_sqlx_error)?;
        Self::from_pool(pool).await
    }

    /// Wraps an existing pool and makes sure the `urls` table exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the schema bootstrap statement fails.
    pub async fn from_pool(pool: PgPool) -> ShortenerResult<Self> {
        sqlx::query(CREATE_URLS_TABLE)
            .execute(&pool)
            .await
            .map_err(map_sqlx_error)?;

        info!("URL store schema ready");

        Ok(Self {
            pool: Arc::new(pool),
        })
    }

    /// Underlying connection pool, for diagnostics.
    pub fn pool(&self) -> &PgPool {
        self.pool.as_ref()
    }

    /// Plain lookup used when the click increment cannot be applied.
    async fn lookup_url(&self, short_code: &str) -> ShortenerResult<Option<String>> {
        sqlx::query_scalar::<_, String>("SELECT original_url FROM urls WHERE short_code = $1")
            .bind(short_code)
            .fetch_optional(self.pool.as_ref())
            .await
            .map_err(map_sqlx_error)
    }
}

#[async_trait]
impl UrlStore for PgUrlStore {
    async fn save(&self, original_url: &str, short_code: &str) -> ShortenerResult<()> {
        sqlx::query("INSERT INTO urls (original_url, short_code) VALUES ($1, $2)")
            .bind(original_url)
            .bind(short_code)
            .execute(self.pool.as_ref())
            .await
            .map_err(map_sqlx_error)?;

        debug!(short_code, "url record inserted");
        Ok(())
    }

    async fn resolve(&self, short_code: &str) -> ShortenerResult<String> {
        let updated = sqlx::query_scalar::<_, String>(
            r#"
            UPDATE urls
            SET clicks = clicks + 1
            WHERE short_code = $1
            RETURNING original_url
            "#,
        )
        .bind(short_code)
        .fetch_optional(self.pool.as_ref())
        .await;

        match updated {
            Ok(Some(original_url)) => Ok(original_url),
            Ok(None) => Err(ShortenerError::NotFound),
            Err(e) => {
                warn!(short_code, error = %e, "failed to increment clicks");
                self.lookup_url(short_code)
                    .await?
                    .ok_or(ShortenerError::NotFound)
            }
        }
    }

    async fn stats(&self, short_code: &str) -> ShortenerResult<i64> {
        sqlx::query_scalar::<_, i64>("SELECT clicks FROM urls WHERE short_code = $1")
            .bind(short_code)
            .fetch_optional(self.pool.as_ref())
            .await
            .map_err(map_sqlx_error)?
            .ok_or(ShortenerError::NotFound)
    }

    async fn find(&self, short_code: &str) -> ShortenerResult<Option<UrlRecord>> {
        sqlx::query_as::<_, UrlRecord>(
            r#"
            SELECT id, original_url, short_code, created_at, clicks
            FROM urls
            WHERE short_code = $1
            "#,
        )
        .bind(short_code)
        .fetch_optional(self.pool.as_ref())
        .await
        .map_err(map_sqlx_error)
    }

    async fn ping(&self) -> ShortenerResult<()> {
        sqlx::query("SELECT 1")
            .execute(self.pool.as_ref())
            .await
            .map_err(map_sqlx_error)?;
        Ok(())
    }

    async fn close(&self) {
        self.pool.close().await;
        info!("URL store connection pool closed");
    }
}

/// Maps a SQLx error onto the store's error taxonomy.
///
/// - unique violation on `short_code` → [`ShortenerError::DuplicateCode`]
/// - other integrity violations → [`ShortenerError::ConstraintViolation`]
/// - closed/exhausted pool, I/O, TLS and protocol failures → [`ShortenerError::Unavailable`]
/// - anything else → [`ShortenerError::Storage`]
pub fn map_sqlx_error(e: sqlx::Error) -> ShortenerError {
    if let Some(db) = e.as_database_error() {
        return match db.kind() {
            ErrorKind::UniqueViolation if db.constraint() == Some(SHORT_CODE_CONSTRAINT) => {
                ShortenerError::DuplicateCode
            }
            ErrorKind::UniqueViolation
            | ErrorKind::ForeignKeyViolation
            | ErrorKind::NotNullViolation
            | ErrorKind::CheckViolation => ShortenerError::ConstraintViolation(
                db.constraint()
                    .map(str::to_string)
                    .unwrap_or_else(|| db.message().to_string()),
            ),
            _ => ShortenerError::Storage(db.message().to_string()),
        };
    }

    match &e {
        sqlx::Error::PoolClosed
        | sqlx::Error::PoolTimedOut
        | sqlx::Error::Io(_)
        | sqlx::Error::Tls(_)
        | sqlx::Error::Protocol(_)
        | sqlx::Error::WorkerCrashed => ShortenerError::Unavailable(e.to_string()),
        _ => ShortenerError::Storage(e.to_string()),
    }
}
