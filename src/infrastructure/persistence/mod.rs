//! Storage engine implementations of [`crate::domain::repositories::UrlStore`].
//!
//! - [`PgUrlStore`] - PostgreSQL via SQLx, the production engine
//! - [`MemoryUrlStore`] - `DashMap`-backed engine for development and tests

pub mod memory_url_store;
pub mod pg_url_store;

pub use memory_url_store::MemoryUrlStore;
pub use pg_url_store::{PgUrlStore, map_sqlx_error};
