//! In-process URL store.

use async_trait::async_trait;
use chrono::Utc;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use std::sync::atomic::{AtomicBool, AtomicI64, Ordering};
use tracing::debug;

use crate::domain::entities::UrlRecord;
use crate::domain::error::{ShortenerError, ShortenerResult};
use crate::domain::repositories::UrlStore;

/// [`UrlStore`] kept entirely in memory.
///
/// Mirrors the PostgreSQL store's semantics: the map entry API gives the same
/// insert-if-absent guarantee as a unique constraint, and click increments
/// happen under the shard lock of the record being resolved. Nothing survives
/// a restart.
///
/// # Use Cases
///
/// - Development without a database (`STORAGE=memory`)
/// - HTTP-level integration tests
#[derive(Debug)]
pub struct MemoryUrlStore {
    records: DashMap<String, UrlRecord>,
    last_id: AtomicI64,
    closed: AtomicBool,
}

impl MemoryUrlStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        debug!("Using in-memory URL store");
        Self {
            records: DashMap::new(),
            last_id: AtomicI64::new(0),
            closed: AtomicBool::new(false),
        }
    }

    /// Number of stored records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    fn ensure_open(&self) -> ShortenerResult<()> {
        if self.closed.load(Ordering::Acquire) {
            return Err(ShortenerError::Unavailable("store is closed".to_string()));
        }
        Ok(())
    }
}

impl Default for MemoryUrlStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UrlStore for MemoryUrlStore {
    async fn save(&self, original_url: &str, short_code: &str) -> ShortenerResult<()> {
        self.ensure_open()?;

        if original_url.is_empty() {
            return Err(ShortenerError::ConstraintViolation(
                "original_url must not be empty".to_string(),
            ));
        }

        match self.records.entry(short_code.to_string()) {
            Entry::Occupied(_) => Err(ShortenerError::DuplicateCode),
            Entry::Vacant(slot) => {
                // `close` may have cleared this shard after the check above.
                self.ensure_open()?;
                let id = self.last_id.fetch_add(1, Ordering::SeqCst) + 1;
                slot.insert(UrlRecord::new(
                    id,
                    original_url.to_string(),
                    short_code.to_string(),
                    Utc::now(),
                    0,
                ));
                Ok(())
            }
        }
    }

    async fn resolve(&self, short_code: &str) -> ShortenerResult<String> {
        self.ensure_open()?;

        let mut record = self
            .records
            .get_mut(short_code)
            .ok_or(ShortenerError::NotFound)?;
        record.clicks += 1;
        Ok(record.original_url.clone())
    }

    async fn stats(&self, short_code: &str) -> ShortenerResult<i64> {
        self.ensure_open()?;

        self.records
            .get(short_code)
            .map(|record| record.clicks)
            .ok_or(ShortenerError::NotFound)
    }

    async fn find(&self, short_code: &str) -> ShortenerResult<Option<UrlRecord>> {
        self.ensure_open()?;
        Ok(self.records.get(short_code).map(|record| record.clone()))
    }

    async fn ping(&self) -> ShortenerResult<()> {
        self.ensure_open()
    }

    async fn close(&self) {
        self.closed.store(true, Ordering::Release);
        self.records.clear();
    }
}
