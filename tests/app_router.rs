mod common;

use axum::http::{HeaderName, HeaderValue, StatusCode};
use axum_test::TestServer;
use serde_json::json;
use shorturl::routes::{RateLimitSettings, app_routes};
use std::time::Duration;

const CLIENT: &str = "10.0.0.1";

fn forwarded_for() -> HeaderName {
    HeaderName::from_static("x-forwarded-for")
}

async fn server(per_minute: u32) -> TestServer {
    let pool = common::test_pool().await;
    let state = common::create_test_state(pool);
    let app = app_routes(
        state,
        RateLimitSettings {
            per_minute,
            behind_proxy: true,
        },
    );

    TestServer::new(app).unwrap()
}

#[tokio::test]
async fn test_shorten_then_redirect() {
    let server = server(20).await;

    let created = server
        .post("/api/v1/shorten")
        .add_header(forwarded_for(), HeaderValue::from_static(CLIENT))
        .json(&json!({ "original_url": "https://example.com/flow" }))
        .await;
    created.assert_status(StatusCode::CREATED);

    let json = created.json::<serde_json::Value>();
    let short_url = json["short_url"].as_str().unwrap();
    let path = short_url.strip_prefix(common::BASE_HOST).unwrap();

    let response = server
        .get(path)
        .add_header(forwarded_for(), HeaderValue::from_static(CLIENT))
        .await;

    response.assert_status(StatusCode::FOUND);
    assert_eq!(response.header("location"), "https://example.com/flow");
}

#[tokio::test]
async fn test_nested_api_routes() {
    let server = server(20).await;

    server
        .get("/api/v1/health")
        .add_header(forwarded_for(), HeaderValue::from_static(CLIENT))
        .await
        .assert_status_ok();

    server
        .get("/api/v1/urls/zz")
        .add_header(forwarded_for(), HeaderValue::from_static(CLIENT))
        .await
        .assert_status_not_found();
}

#[tokio::test]
async fn test_security_headers_present() {
    let server = server(20).await;

    let response = server
        .get("/api/v1/health")
        .add_header(forwarded_for(), HeaderValue::from_static(CLIENT))
        .await;

    assert_eq!(response.header("x-content-type-options"), "nosniff");
    assert_eq!(response.header("x-frame-options"), "DENY");
    assert_eq!(response.header("referrer-policy"), "no-referrer");
    assert_eq!(
        response.header("strict-transport-security"),
        "max-age=15552000; includeSubDomains"
    );
    assert_eq!(
        response.header("cross-origin-resource-policy"),
        "same-origin"
    );
    assert_eq!(response.header("x-dns-prefetch-control"), "off");
}

#[tokio::test]
async fn test_rate_limit_rejects_over_limit() {
    let server = server(3).await;

    for _ in 0..3 {
        server
            .get("/missing")
            .add_header(forwarded_for(), HeaderValue::from_static(CLIENT))
            .await
            .assert_status_not_found();
    }

    let response = server
        .post("/api/v1/shorten")
        .add_header(forwarded_for(), HeaderValue::from_static(CLIENT))
        .json(&json!({ "original_url": "https://example.com" }))
        .await;

    response.assert_status(StatusCode::TOO_MANY_REQUESTS);
}

#[tokio::test]
async fn test_rate_limit_refills_one_request_per_period() {
    // 60 per minute refills one request every second
    let server = server(60).await;

    for _ in 0..60 {
        server
            .get("/missing")
            .add_header(forwarded_for(), HeaderValue::from_static(CLIENT))
            .await
            .assert_status_not_found();
    }
    server
        .get("/missing")
        .add_header(forwarded_for(), HeaderValue::from_static(CLIENT))
        .await
        .assert_status(StatusCode::TOO_MANY_REQUESTS);

    tokio::time::sleep(Duration::from_millis(1100)).await;

    server
        .get("/missing")
        .add_header(forwarded_for(), HeaderValue::from_static(CLIENT))
        .await
        .assert_status_not_found();
    server
        .get("/missing")
        .add_header(forwarded_for(), HeaderValue::from_static(CLIENT))
        .await
        .assert_status(StatusCode::TOO_MANY_REQUESTS);
}

#[tokio::test]
async fn test_rate_limit_is_per_client() {
    let server = server(1).await;

    server
        .get("/missing")
        .add_header(forwarded_for(), HeaderValue::from_static("10.0.0.1"))
        .await
        .assert_status_not_found();
    server
        .get("/missing")
        .add_header(forwarded_for(), HeaderValue::from_static("10.0.0.1"))
        .await
        .assert_status(StatusCode::TOO_MANY_REQUESTS);

    server
        .get("/missing")
        .add_header(forwarded_for(), HeaderValue::from_static("10.0.0.2"))
        .await
        .assert_status_not_found();
}

#[tokio::test]
async fn test_rate_limit_by_peer_address() {
    use axum::Router;
    use shorturl::api::handlers::redirect_handler;
    use shorturl::api::middleware::rate_limit;
    use tower_governor::key_extractor::PeerIpKeyExtractor;

    let pool = common::test_pool().await;
    let state = common::create_test_state(pool);
    let app = Router::new()
        .route("/{code}", axum::routing::get(redirect_handler))
        .with_state(state)
        .layer(rate_limit::layer(PeerIpKeyExtractor, 1))
        .layer(common::MockConnectInfoLayer);

    let server = TestServer::new(app).unwrap();

    server.get("/missing").await.assert_status_not_found();
    server
        .get("/missing")
        .await
        .assert_status(StatusCode::TOO_MANY_REQUESTS);
}
