mod common;

use async_trait::async_trait;
use axum_test::TestServer;
use std::sync::Arc;
use std::time::Duration;
use url_shortener::application::services::{ShortenerService, ShortenerSettings};
use url_shortener::domain::entities::UrlRecord;
use url_shortener::domain::error::ShortenerResult;
use url_shortener::domain::repositories::UrlStore;
use url_shortener::infrastructure::persistence::MemoryUrlStore;
use url_shortener::routes::router;
use url_shortener::state::{AppState, BasicCredentials};

/// Memory store whose connectivity probe hangs for `delay`.
struct SlowPingStore {
    inner: MemoryUrlStore,
    delay: Duration,
}

#[async_trait]
impl UrlStore for SlowPingStore {
    async fn save(&self, original_url: &str, short_code: &str) -> ShortenerResult<()> {
        self.inner.save(original_url, short_code).await
    }

    async fn resolve(&self, short_code: &str) -> ShortenerResult<String> {
        self.inner.resolve(short_code).await
    }

    async fn stats(&self, short_code: &str) -> ShortenerResult<i64> {
        self.inner.stats(short_code).await
    }

    async fn find(&self, short_code: &str) -> ShortenerResult<Option<UrlRecord>> {
        self.inner.find(short_code).await
    }

    async fn ping(&self) -> ShortenerResult<()> {
        tokio::time::sleep(self.delay).await;
        self.inner.ping().await
    }

    async fn close(&self) {
        self.inner.close().await
    }
}

fn make_server(delay: Duration, request_timeout: Duration) -> TestServer {
    let store = Arc::new(SlowPingStore {
        inner: MemoryUrlStore::new(),
        delay,
    });
    let service = Arc::new(ShortenerService::new(store, ShortenerSettings::default()));
    let state = AppState::new(
        service,
        BasicCredentials {
            user: common::TEST_USER.to_string(),
            password: common::TEST_PASSWORD.to_string(),
        },
        Some(common::TEST_BASE_URL.to_string()),
    );

    TestServer::new(router(state, request_timeout)).unwrap()
}

#[tokio::test]
async fn test_slow_request_times_out() {
    let server = make_server(Duration::from_secs(5), Duration::from_millis(50));

    let response = server.get("/health").await;

    assert_eq!(response.status_code(), 408);
}

#[tokio::test]
async fn test_request_within_deadline_succeeds() {
    let server = make_server(Duration::from_millis(10), Duration::from_secs(5));

    let response = server.get("/health").await;

    response.assert_status_ok();
}

#[tokio::test]
async fn test_timed_out_response_keeps_request_id() {
    let server = make_server(Duration::from_secs(5), Duration::from_millis(50));

    let response = server
        .get("/health")
        .add_header("x-request-id", "slow-request-1")
        .await;

    assert_eq!(response.status_code(), 408);
    assert_eq!(response.header("x-request-id"), "slow-request-1");
}
