//! DTOs for the link shortening endpoint.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Longest URL accepted for shortening, in characters, counted before
/// surrounding whitespace is trimmed.
pub const MAX_URL_LENGTH: u64 = 2048;

/// Request to shorten a single URL, sent as JSON or as a form.
///
/// `original_url` is optional at the serde level so that a missing field is
/// reported with the same message as an empty one.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct ShortenRequest {
    #[validate(length(max = MAX_URL_LENGTH, message = "URL is too long"))]
    #[serde(default)]
    pub original_url: Option<String>,
}

/// Successful shortening result.
#[derive(Debug, Serialize)]
pub struct ShortenResponse {
    pub short_url: String,
    pub original_url: String,
}
