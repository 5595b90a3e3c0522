//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /{code}`               - Short link redirect
//! - `POST /api/v1/shorten`       - Create a short URL
//! - `GET  /api/v1/urls/{code}`   - Short code details
//! - `GET  /api/v1/health`        - Health check
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Security headers** - `nosniff`, frame denial, referrer policy, HSTS
//! - **Rate limiting** - Per-client limit, applied before any handler
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::redirect_handler;
use crate::api::middleware::{rate_limit, security_headers, tracing};
use crate::state::AppState;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_governor::key_extractor::{PeerIpKeyExtractor, SmartIpKeyExtractor};
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Rate limit settings for [`app_router`].
#[derive(Debug, Clone, Copy)]
pub struct RateLimitSettings {
    /// Requests allowed per client per minute.
    pub per_minute: u32,
    /// When `true`, the client key is read from `X-Forwarded-For` /
    /// `X-Real-IP` instead of the peer socket address. Enable only behind a
    /// trusted reverse proxy.
    pub behind_proxy: bool,
}

/// Constructs the application router with all routes and middleware.
///
/// Without `behind_proxy` the server must be started with
/// `into_make_service_with_connect_info::<SocketAddr>` so the peer address is
/// available to the rate limiter.
pub fn app_router(state: AppState, rate_limit: RateLimitSettings) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(app_routes(state, rate_limit))
}

/// Same as [`app_router`] without trailing-slash normalization.
pub fn app_routes(state: AppState, settings: RateLimitSettings) -> Router {
    let router = Router::new()
        .route("/{code}", get(redirect_handler))
        .nest("/api", api::routes::routes())
        .with_state(state);

    let router = if settings.behind_proxy {
        router.layer(rate_limit::layer(SmartIpKeyExtractor, settings.per_minute))
    } else {
        router.layer(rate_limit::layer(PeerIpKeyExtractor, settings.per_minute))
    };

    security_headers::apply(router).layer(tracing::layer())
}
