//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    http::{StatusCode, header},
    response::IntoResponse,
};
use tracing::debug;
use url::Url;

use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short code to its original URL.
///
/// # Endpoint
///
/// `GET /{code}`
///
/// The code is looked up verbatim; it is not decoded or checked against the
/// base-62 alphabet first.
///
/// # Response
///
/// `302 Found` with `Location` set to the stored URL.
///
/// # Errors
///
/// Returns 404 Not Found if no URL carries the code.
/// Returns 500 Internal Server Error on store failures.
pub async fn redirect_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let url = state.url_service.resolve(&code).await?;

    debug!(code = %code, id = url.id, "Redirecting");

    Ok((
        StatusCode::FOUND,
        [(header::LOCATION, location_for(&url.original_url))],
    ))
}

/// Serializes the stored URL for a `Location` header.
///
/// Non-ASCII characters are percent-encoded by re-serializing through
/// [`Url`]. Stored URLs always parse, the raw value is only a fallback.
fn location_for(original_url: &str) -> String {
    Url::parse(original_url)
        .map(String::from)
        .unwrap_or_else(|_| original_url.to_string())
}
