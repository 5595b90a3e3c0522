#![allow(dead_code)]

use axum::extract::ConnectInfo;
use sqlx::SqlitePool;
use sqlx::sqlite::SqlitePoolOptions;
use std::net::SocketAddr;
use std::sync::Arc;
use tower::Layer;
use shorturl::infrastructure::persistence::{MIGRATOR, SqliteUrlRepository};
use shorturl::state::AppState;

pub const BASE_HOST: &str = "https://s.example.com";

/// Fresh in-memory database with migrations applied.
///
/// A single connection that never expires, since every new connection to
/// `sqlite::memory:` opens a separate empty database.
pub async fn test_pool() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect("sqlite::memory:")
        .await
        .unwrap();

    MIGRATOR.run(&pool).await.unwrap();
    pool
}

pub fn create_test_state(pool: SqlitePool) -> AppState {
    let repository = Arc::new(SqliteUrlRepository::new(Arc::new(pool)));
    AppState::new(repository, BASE_HOST)
}

pub async fn insert_url(pool: &SqlitePool, url: &str, code: Option<&str>) -> i64 {
    sqlx::query_scalar("INSERT INTO urls (original_url, short_code) VALUES (?, ?) RETURNING id")
        .bind(url)
        .bind(code)
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn count_urls(pool: &SqlitePool) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM urls")
        .fetch_one(pool)
        .await
        .unwrap()
}

/// Inserts a fixed peer address, standing in for
/// `into_make_service_with_connect_info` under the mock transport.
#[derive(Clone)]
pub struct MockConnectInfoLayer;

impl<S> Layer<S> for MockConnectInfoLayer {
    type Service = MockConnectInfoService<S>;

    fn layer(&self, inner: S) -> Self::Service {
        MockConnectInfoService { inner }
    }
}

#[derive(Clone)]
pub struct MockConnectInfoService<S> {
    inner: S,
}

impl<S, B> tower::Service<axum::http::Request<B>> for MockConnectInfoService<S>
where
    S: tower::Service<axum::http::Request<B>> + Clone + Send + 'static,
    S::Future: Send + 'static,
    B: Send + 'static,
{
    type Response = S::Response;
    type Error = S::Error;
    type Future = S::Future;

    fn poll_ready(
        &mut self,
        cx: &mut std::task::Context<'_>,
    ) -> std::task::Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, mut req: axum::http::Request<B>) -> Self::Future {
        let addr: SocketAddr = "127.0.0.1:12345".parse().unwrap();
        req.extensions_mut().insert(ConnectInfo(addr));
        self.inner.call(req)
    }
}
