//! Input URL checks applied before a URL is stored.
//!
//! Only syntax is checked: the input must parse as an absolute URL with a
//! supported scheme and a host. The accepted string is stored as trimmed,
//! without any further rewriting.

use url::Url;

/// Schemes accepted for shortening.
const ALLOWED_SCHEMES: &[&str] = &["http", "https", "ftp"];

/// Errors that can occur while checking a candidate URL.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum UrlValidationError {
    #[error("URL is missing or empty")]
    Missing,

    #[error("Invalid URL format: {0}")]
    InvalidFormat(String),

    #[error("Unsupported URL scheme: {0}")]
    UnsupportedScheme(String),

    #[error("URL has no host")]
    MissingHost,
}

/// Trims the candidate and checks that it is a syntactically valid URL.
///
/// # Rules
///
/// 1. `None`, `""` and whitespace-only input are [`UrlValidationError::Missing`]
/// 2. Surrounding whitespace is removed
/// 3. The rest must parse as an absolute URL
/// 4. Scheme must be one of `http`, `https`, `ftp`
/// 5. Host must be present and non-empty
///
/// # Examples
///
/// ```
/// use shorturl::utils::url_validation::validate_original_url;
///
/// assert_eq!(
///     validate_original_url(Some("  https://example.com/page ")).unwrap(),
///     "https://example.com/page"
/// );
/// assert!(validate_original_url(Some("not-a-url")).is_err());
/// ```
pub fn validate_original_url(input: Option<&str>) -> Result<String, UrlValidationError> {
    let trimmed = input.map(str::trim).unwrap_or_default();
    if trimmed.is_empty() {
        return Err(UrlValidationError::Missing);
    }

    let url = Url::parse(trimmed).map_err(|e| UrlValidationError::InvalidFormat(e.to_string()))?;

    if !ALLOWED_SCHEMES.contains(&url.scheme()) {
        return Err(UrlValidationError::UnsupportedScheme(url.scheme().to_string()));
    }

    match url.host_str() {
        Some(host) if !host.is_empty() => Ok(trimmed.to_string()),
        _ => Err(UrlValidationError::MissingHost),
    }
}
