//! Handler for link shortening endpoint.

use axum::{
    Form, Json,
    extract::{FromRequest, Request, State},
    http::{StatusCode, header},
};
use validator::Validate;

use crate::api::dto::shorten::{ShortenRequest, ShortenResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Shorten request body, decoded as a form when the request says so and as
/// JSON otherwise.
pub struct ShortenBody(pub ShortenRequest);

impl<S> FromRequest<S> for ShortenBody
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        if is_form(&req) {
            let Form(payload) = Form::<ShortenRequest>::from_request(req, state).await?;
            Ok(Self(payload))
        } else {
            let Json(payload) = Json::<ShortenRequest>::from_request(req, state).await?;
            Ok(Self(payload))
        }
    }
}

fn is_form(req: &Request) -> bool {
    req.headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|ct| ct.starts_with("application/x-www-form-urlencoded"))
}

/// Creates a short URL for one long URL.
///
/// # Endpoint
///
/// `POST /api/v1/shorten`
///
/// # Request Body
///
/// ```json
/// { "original_url": "https://example.com/page" }
/// ```
///
/// or `application/x-www-form-urlencoded`:
///
/// ```text
/// original_url=https%3A%2F%2Fexample.com%2Fpage
/// ```
///
/// # Response
///
/// `201 Created`
///
/// ```json
/// {
///   "short_url": "https://s.example.com/2B",
///   "original_url": "https://example.com/page"
/// }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request if the body is malformed or the URL is missing,
/// too long or invalid.
/// Returns 500 Internal Server Error on store failures.
pub async fn shorten_handler(
    State(state): State<AppState>,
    ShortenBody(payload): ShortenBody,
) -> Result<(StatusCode, Json<ShortenResponse>), AppError> {
    payload.validate()?;

    let link = state
        .url_service
        .shorten(payload.original_url.as_deref())
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ShortenResponse {
            short_url: link.short_url,
            original_url: link.original_url,
        }),
    ))
}
