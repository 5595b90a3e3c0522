//! HTTP request/response tracing middleware.

use axum::body::Body;
use axum::http::Request;
use std::time::Duration;
use tower_http::LatencyUnit;
use tower_http::classify::{ServerErrorsAsFailures, ServerErrorsFailureClass, SharedClassifier};
use tower_http::trace::{
    DefaultOnBodyChunk, DefaultOnEos, DefaultOnRequest, DefaultOnResponse, TraceLayer,
};
use tracing::{Level, Span};

type MakeSpanFn = fn(&Request<Body>) -> Span;
type OnFailureFn = fn(ServerErrorsFailureClass, Duration, &Span);

/// Tracing layer as configured by [`layer`].
pub type HttpTraceLayer = TraceLayer<
    SharedClassifier<ServerErrorsAsFailures>,
    MakeSpanFn,
    DefaultOnRequest,
    DefaultOnResponse,
    DefaultOnBodyChunk,
    DefaultOnEos,
    OnFailureFn,
>;

/// Creates a tracing middleware for HTTP requests.
///
/// Each request gets an `INFO` span with the method and path. The query
/// string is left out, so submitted URLs never reach the logs through it.
/// Responses are logged at `INFO` with status and latency in milliseconds.
/// 5xx responses and transport errors are additionally logged at `ERROR`.
///
/// # Example Logs
///
/// ```text
/// INFO request{method=POST path=/api/v1/shorten}: finished processing request latency=3 ms status=201
/// ERROR request{method=GET path=/21}: request failed class=Status code: 500 latency_ms=2
/// ```
pub fn layer() -> HttpTraceLayer {
    TraceLayer::new_for_http()
        .make_span_with(make_span as MakeSpanFn)
        .on_response(
            DefaultOnResponse::new()
                .level(Level::INFO)
                .latency_unit(LatencyUnit::Millis),
        )
        .on_failure(on_failure as OnFailureFn)
}

fn make_span(request: &Request<Body>) -> Span {
    tracing::info_span!(
        "request",
        method = %request.method(),
        path = %request.uri().path(),
    )
}

fn on_failure(class: ServerErrorsFailureClass, latency: Duration, _span: &Span) {
    tracing::error!(
        class = %class,
        latency_ms = latency.as_millis() as u64,
        "request failed"
    );
}
