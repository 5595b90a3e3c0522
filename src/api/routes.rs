//! API route configuration.

use crate::api::handlers::{health_handler, shorten_handler, url_info_handler};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// Versioned API routes, mounted under `/api`.
///
/// # Endpoints
///
/// - `POST /v1/shorten`       - Create a short URL
/// - `GET  /v1/urls/{code}`   - Stored details of a short code
/// - `GET  /v1/health`        - Database health check
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/v1/shorten", post(shorten_handler))
        .route("/v1/urls/{code}", get(url_info_handler))
        .route("/v1/health", get(health_handler))
}
