//! DTOs for the link shortening endpoint.

use serde::{Deserialize, Serialize};

/// Response status value for successful calls.
pub const STATUS_OK: &str = "OK";

/// Request to shorten a single URL.
///
/// A missing `url` field deserializes to an empty string so it is reported
/// as "url is required" rather than as a malformed body.
#[derive(Debug, Deserialize)]
pub struct ShortenRequest {
    #[serde(default)]
    pub url: String,
}

/// Successful shortening result.
#[derive(Debug, Serialize)]
pub struct ShortenResponse {
    pub status: &'static str,
    pub short_url: String,
}

impl ShortenResponse {
    pub fn ok(short_url: String) -> Self {
        Self {
            status: STATUS_OK,
            short_url,
        }
    }
}
