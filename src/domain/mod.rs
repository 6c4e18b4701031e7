//! Domain layer containing business entities, errors and storage contracts.
//!
//! # Architecture
//!
//! - [`entities`] - Core business data structures
//! - [`repositories`] - Data access trait definitions
//! - [`error`] - Error taxonomy of the shortening path
//!
//! The domain layer has no dependencies on the infrastructure or HTTP layers.
//! Business logic lives in services (see [`crate::application::services`]).

pub mod entities;
pub mod error;
pub mod repositories;

pub use error::{ShortenerError, ShortenerResult};
