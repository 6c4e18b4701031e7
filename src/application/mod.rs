//! Application layer services implementing business logic.
//!
//! Services consume the storage trait and provide a clean API for HTTP
//! handlers and the admin CLI.
//!
//! # Available Services
//!
//! - [`services::shortener_service::ShortenerService`] - Short link creation, redirects and stats

pub mod services;
