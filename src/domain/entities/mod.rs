//! Core domain entities.
//!
//! The service persists a single entity, [`UrlRecord`]. It is a plain data
//! structure; the rules around it live in the store and the service.

pub mod url_record;

pub use url_record::UrlRecord;
