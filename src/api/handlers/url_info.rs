//! Handler for short code lookup.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::api::dto::url_info::UrlInfoResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Returns the stored details of a short code.
///
/// # Endpoint
///
/// `GET /api/v1/urls/{code}`
///
/// Unlike the redirect, the code is decoded back into the row identifier and
/// the row is read by id.
///
/// # Response
///
/// ```json
/// {
///   "id": 125,
///   "short_code": "21",
///   "short_url": "https://s.example.com/21",
///   "original_url": "https://example.com/page",
///   "created_at": "2024-06-01T12:00:00Z"
/// }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request if the code contains characters outside `0-9A-Za-z`.
/// Returns 404 Not Found if no row matches.
pub async fn url_info_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<UrlInfoResponse>, AppError> {
    let url = state.url_service.lookup(&code).await?;

    Ok(Json(UrlInfoResponse {
        id: url.id,
        short_url: state.url_service.short_url(&code),
        short_code: code,
        original_url: url.original_url,
        created_at: url.created_at,
    }))
}
