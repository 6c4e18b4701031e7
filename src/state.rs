//! Shared application state injected into all handlers.

use std::sync::Arc;

use crate::application::services::ShortenerService;

/// Handles shared by every request.
///
/// Cloning is cheap: everything is behind an [`Arc`].
#[derive(Clone)]
pub struct AppState {
    pub shortener_service: Arc<ShortenerService>,
    pub auth: Arc<BasicCredentials>,
    /// Public base of short links; `None` means "derive from the Host header".
    pub base_url: Option<Arc<str>>,
}

/// Credentials accepted by the basic-auth middleware.
#[derive(Debug, Clone)]
pub struct BasicCredentials {
    pub user: String,
    pub password: String,
}

impl AppState {
    pub fn new(
        shortener_service: Arc<ShortenerService>,
        auth: BasicCredentials,
        base_url: Option<String>,
    ) -> Self {
        Self {
            shortener_service,
            auth: Arc::new(auth),
            base_url: base_url.map(Arc::from),
        }
    }
}
