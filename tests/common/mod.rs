#![allow(dead_code)]

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use std::sync::Arc;
use std::time::Duration;
use url_shortener::application::services::{ShortenerService, ShortenerSettings};
use url_shortener::infrastructure::persistence::MemoryUrlStore;
use url_shortener::state::{AppState, BasicCredentials};

pub const TEST_USER: &str = "admin";
pub const TEST_PASSWORD: &str = "secret";
pub const TEST_BASE_URL: &str = "http://sho.rt";
pub const TEST_HTTP_TIMEOUT: Duration = Duration::from_secs(5);

/// State backed by an in-memory store, with `BASE_URL` set to [`TEST_BASE_URL`].
pub fn create_test_state() -> (AppState, Arc<MemoryUrlStore>) {
    create_state_with_base(Some(TEST_BASE_URL.to_string()))
}

pub fn create_state_with_base(base_url: Option<String>) -> (AppState, Arc<MemoryUrlStore>) {
    let store = Arc::new(MemoryUrlStore::new());
    let service = Arc::new(ShortenerService::new(
        store.clone(),
        ShortenerSettings::default(),
    ));

    let state = AppState::new(
        service,
        BasicCredentials {
            user: TEST_USER.to_string(),
            password: TEST_PASSWORD.to_string(),
        },
        base_url,
    );

    (state, store)
}

pub fn basic_auth(user: &str, password: &str) -> String {
    format!("Basic {}", STANDARD.encode(format!("{}:{}", user, password)))
}

pub fn admin_auth() -> String {
    basic_auth(TEST_USER, TEST_PASSWORD)
}
