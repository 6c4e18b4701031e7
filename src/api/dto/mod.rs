//! Data Transfer Objects for API requests and responses.
//!
//! Successful responses carry `"status": "OK"`; failures use the envelope
//! rendered by [`crate::error::AppError`].

pub mod health;
pub mod shorten;
pub mod stats;
