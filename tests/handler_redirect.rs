mod common;

use axum::{Router, http::StatusCode, routing::get};
use axum_test::TestServer;
use shorturl::api::handlers::redirect_handler;

async fn server_with_pool() -> (TestServer, sqlx::SqlitePool) {
    let pool = common::test_pool().await;
    let state = common::create_test_state(pool.clone());
    let app = Router::new()
        .route("/{code}", get(redirect_handler))
        .with_state(state);

    (TestServer::new(app).unwrap(), pool)
}

#[tokio::test]
async fn test_redirect_success() {
    let (server, pool) = server_with_pool().await;
    common::insert_url(&pool, "https://example.com/target", Some("1")).await;

    let response = server.get("/1").await;

    response.assert_status(StatusCode::FOUND);
    assert_eq!(response.header("location"), "https://example.com/target");
}

#[tokio::test]
async fn test_redirect_keeps_query_string() {
    let (server, pool) = server_with_pool().await;
    common::insert_url(&pool, "https://example.com/search?q=rust&page=2", Some("1")).await;

    let response = server.get("/1").await;

    response.assert_status(StatusCode::FOUND);
    assert_eq!(
        response.header("location"),
        "https://example.com/search?q=rust&page=2"
    );
}

#[tokio::test]
async fn test_redirect_not_found() {
    let (server, _pool) = server_with_pool().await;

    let response = server.get("/zz").await;

    response.assert_status_not_found();
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"], "URL not found");
}

#[tokio::test]
async fn test_redirect_is_case_sensitive() {
    let (server, pool) = server_with_pool().await;
    common::insert_url(&pool, "https://example.com/upper", Some("A")).await;

    server.get("/A").await.assert_status(StatusCode::FOUND);
    server.get("/a").await.assert_status_not_found();
}

#[tokio::test]
async fn test_redirect_non_canonical_code_not_found() {
    let (server, pool) = server_with_pool().await;
    common::insert_url(&pool, "https://example.com/one", Some("1")).await;

    // "01" decodes to the same id but is not the stored code
    server.get("/01").await.assert_status_not_found();
}

#[tokio::test]
async fn test_redirect_code_outside_alphabet_not_found() {
    let (server, _pool) = server_with_pool().await;

    server.get("/a-b_c").await.assert_status_not_found();
}

#[tokio::test]
async fn test_redirect_row_without_code_not_reachable() {
    let (server, pool) = server_with_pool().await;
    let id = common::insert_url(&pool, "https://example.com/orphan", None).await;

    let code = shorturl::utils::base62::encode(id as u64);
    server.get(&format!("/{code}")).await.assert_status_not_found();
}
