//! HTTP middleware for request processing and protection.
//!
//! Provides basic authentication, request IDs, request deadlines and
//! observability middleware.

pub mod auth;
pub mod request_id;
pub mod timeout;
pub mod tracing;
