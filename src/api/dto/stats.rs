//! DTOs for link statistics.

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::shorten::STATUS_OK;
use crate::domain::entities::UrlRecord;

/// Click statistics for one short link.
#[derive(Debug, Serialize)]
pub struct StatsResponse {
    pub status: &'static str,
    pub short_code: String,
    pub original_url: String,
    pub clicks: i64,
    pub created_at: DateTime<Utc>,
}

impl From<UrlRecord> for StatsResponse {
    fn from(record: UrlRecord) -> Self {
        Self {
            status: STATUS_OK,
            short_code: record.short_code,
            original_url: record.original_url,
            clicks: record.clicks,
            created_at: record.created_at,
        }
    }
}
