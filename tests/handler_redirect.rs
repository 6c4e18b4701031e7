mod common;

use axum::{Router, routing::get};
use axum_test::TestServer;
use url_shortener::api::handlers::redirect_handler;
use url_shortener::domain::repositories::UrlStore;
use url_shortener::routes::router;

#[tokio::test]
async fn test_redirect_success() {
    let (state, store) = common::create_test_state();
    let app = Router::new()
        .route("/{code}", get(redirect_handler))
        .with_state(state);

    let server = TestServer::new(app).unwrap();

    store
        .save("https://example.com/target", "redirect01")
        .await
        .unwrap();

    let response = server.get("/redirect01").await;

    assert_eq!(response.status_code(), 302);

    let location = response.header("location");
    assert_eq!(location, "https://example.com/target");
}

#[tokio::test]
async fn test_redirect_counts_clicks() {
    let (state, store) = common::create_test_state();
    let server = TestServer::new(router(state, common::TEST_HTTP_TIMEOUT)).unwrap();

    store.save("https://example.com", "clicks0001").await.unwrap();

    for _ in 0..3 {
        let response = server.get("/clicks0001").await;
        assert_eq!(response.status_code(), 302);
    }

    assert_eq!(store.stats("clicks0001").await.unwrap(), 3);
}

#[tokio::test]
async fn test_redirect_not_found() {
    let (state, _store) = common::create_test_state();
    let server = TestServer::new(router(state, common::TEST_HTTP_TIMEOUT)).unwrap();

    let response = server.get("/nosuchcode").await;

    assert_eq!(response.status_code(), 404);

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "Error");
    assert_eq!(json["error"], "url not found");
}

#[tokio::test]
async fn test_redirect_malformed_code() {
    let (state, store) = common::create_test_state();
    let server = TestServer::new(router(state, common::TEST_HTTP_TIMEOUT)).unwrap();

    // Stored directly, but never reachable through the redirect route
    store.save("https://example.com", "short").await.unwrap();

    let response = server.get("/short").await;
    assert_eq!(response.status_code(), 404);

    let response = server.get("/has-dash-01").await;
    assert_eq!(response.status_code(), 404);

    assert_eq!(store.stats("short").await.unwrap(), 0);
}

#[tokio::test]
async fn test_redirect_store_closed() {
    let (state, store) = common::create_test_state();
    let server = TestServer::new(router(state, common::TEST_HTTP_TIMEOUT)).unwrap();

    store.save("https://example.com", "closed0001").await.unwrap();
    store.close().await;

    let response = server.get("/closed0001").await;

    assert_eq!(response.status_code(), 503);
}

#[tokio::test]
async fn test_redirect_echoes_request_id() {
    let (state, store) = common::create_test_state();
    let server = TestServer::new(router(state, common::TEST_HTTP_TIMEOUT)).unwrap();

    store.save("https://example.com", "requestid1").await.unwrap();

    let response = server
        .get("/requestid1")
        .add_header("x-request-id", "test-request-42")
        .await;

    assert_eq!(response.status_code(), 302);
    assert_eq!(response.header("x-request-id"), "test-request-42");

    let response = server.get("/requestid1").await;
    assert!(!response.header("x-request-id").is_empty());
}

#[tokio::test]
async fn test_shorten_then_redirect() {
    let (state, store) = common::create_test_state();
    let server = TestServer::new(router(state, common::TEST_HTTP_TIMEOUT)).unwrap();

    let response = server
        .post("/url")
        .add_header("Authorization", common::admin_auth())
        .json(&serde_json::json!({ "url": "https://www.rust-lang.org/learn" }))
        .await;
    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    let short_url = json["short_url"].as_str().unwrap();
    let code = short_url.strip_prefix("http://sho.rt/").unwrap().to_string();

    let response = server.get(&format!("/{}", code)).await;

    assert_eq!(response.status_code(), 302);
    assert_eq!(
        response.header("location"),
        "https://www.rust-lang.org/learn"
    );
    assert_eq!(store.stats(&code).await.unwrap(), 1);
}
