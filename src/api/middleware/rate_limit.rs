//! Per-client rate limiting middleware.

use governor::clock::QuantaInstant;
use governor::middleware::NoOpMiddleware;
use std::sync::Arc;
use tower_governor::{
    GovernorLayer, governor::GovernorConfigBuilder, key_extractor::KeyExtractor,
};

/// Creates a rate limiter allowing `per_minute` requests per client.
///
/// # Limits
///
/// - **Burst**: `per_minute` requests
/// - **Refill**: one request every `60 / per_minute` seconds
///
/// This is a GCRA limiter, not a fixed window. The sustained rate is
/// `per_minute` requests per minute, but a client that starts with a full
/// burst and keeps sending gets up to `2 * per_minute - 1` requests through
/// in its first 60 seconds: the whole burst plus everything refilled
/// meanwhile. Requests over the limit receive `429 Too Many Requests`
/// before reaching a handler.
///
/// # Key Extraction
///
/// The caller chooses the key: `PeerIpKeyExtractor` for direct deployments,
/// `SmartIpKeyExtractor` (forwarding headers first) behind a trusted proxy.
///
/// # Panics
///
/// Panics if `per_minute` is zero. [`crate::config::Config::validate`]
/// rejects that value at startup.
///
/// # Example
///
/// ```rust,ignore
/// let app = Router::new()
///     .route("/api/v1/shorten", post(shorten_handler))
///     .layer(rate_limit::layer(PeerIpKeyExtractor, 20));
/// ```
pub fn layer<K>(
    key_extractor: K,
    per_minute: u32,
) -> GovernorLayer<K, NoOpMiddleware<QuantaInstant>, axum::body::Body>
where
    K: KeyExtractor,
{
    let replenish_ms = 60_000 / u64::from(per_minute);

    let governor_conf = Arc::new(
        GovernorConfigBuilder::default()
            .key_extractor(key_extractor)
            .per_millisecond(replenish_ms.max(1))
            .burst_size(per_minute)
            .finish()
            .expect("rate limit must be greater than zero"),
    );

    GovernorLayer::new(governor_conf)
}
