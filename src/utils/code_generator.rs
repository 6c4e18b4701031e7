//! Short code generation.
//!
//! Codes are drawn from a fast, non-cryptographic PRNG. Uniqueness is not
//! guaranteed here: collisions are caught by the store's unique constraint
//! and retried by [`crate::application::services::ShortenerService`].

use rand::distr::Alphanumeric;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::time::{SystemTime, UNIX_EPOCH};

/// Length of every generated short code.
pub const SHORT_CODE_LENGTH: usize = 10;

/// Upper bound (exclusive) of the auxiliary draw mixed into the seed.
const SEED_JITTER: u64 = 1_000_000;

/// Generates a random code of exactly `length` characters from `[A-Za-z0-9]`.
///
/// Each call seeds a fresh generator from the current time in nanoseconds
/// plus an auxiliary random draw, so two calls in the same nanosecond still
/// diverge.
///
/// # Examples
///
/// ```
/// use url_shortener::utils::code_generator::generate_code;
///
/// let code = generate_code(10);
/// assert_eq!(code.len(), 10);
/// assert!(code.chars().all(|c| c.is_ascii_alphanumeric()));
/// ```
pub fn generate_code(length: usize) -> String {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or_default();
    let seed = nanos.wrapping_add(rand::random_range(0..SEED_JITTER));

    StdRng::seed_from_u64(seed)
        .sample_iter(Alphanumeric)
        .take(length)
        .map(char::from)
        .collect()
}

/// Returns true if `code` has the shape of a generated short code.
pub fn is_valid_code(code: &str) -> bool {
    code.len() == SHORT_CODE_LENGTH && code.bytes().all(|b| b.is_ascii_alphanumeric())
}
