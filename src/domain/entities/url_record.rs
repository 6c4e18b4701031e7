//! URL record entity, the only persisted type.

use chrono::{DateTime, Utc};

/// A stored mapping from a short code to its original URL.
///
/// Records are created once and afterwards only their `clicks` counter changes.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct UrlRecord {
    pub id: i64,
    pub original_url: String,
    pub short_code: String,
    pub created_at: DateTime<Utc>,
    pub clicks: i64,
}

impl UrlRecord {
    /// Creates a new UrlRecord instance.
    pub fn new(
        id: i64,
        original_url: String,
        short_code: String,
        created_at: DateTime<Utc>,
        clicks: i64,
    ) -> Self {
        Self {
            id,
            original_url,
            short_code,
            created_at,
            clicks,
        }
    }
}
