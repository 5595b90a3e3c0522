//! URL shortening, redirect resolution and lookup service.

use std::sync::Arc;

use crate::domain::entities::ShortenedUrl;
use crate::domain::repositories::UrlRepository;
use crate::error::AppError;
use crate::utils::base62;
use crate::utils::url_validation::validate_original_url;

/// Outcome of a successful shorten call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortenedLink {
    pub id: i64,
    pub code: String,
    pub short_url: String,
    pub original_url: String,
}

/// Service for issuing and resolving short codes.
///
/// Codes are never chosen independently: each one is the base-62 encoding of
/// the identifier the store assigned to the row, which makes them unique
/// without any collision check.
pub struct UrlService<R: UrlRepository + ?Sized> {
    repository: Arc<R>,
    base_host: String,
}

impl<R: UrlRepository + ?Sized> UrlService<R> {
    /// Creates a new URL service.
    ///
    /// `base_host` is the scheme and host prefix of issued short URLs. A
    /// trailing `/` is dropped.
    pub fn new(repository: Arc<R>, base_host: impl Into<String>) -> Self {
        let base_host = base_host.into().trim_end_matches('/').to_string();
        Self {
            repository,
            base_host,
        }
    }

    /// Shortens a URL.
    ///
    /// # Flow
    ///
    /// 1. Trim and syntax-check the input
    /// 2. Insert a row without a code and take its identifier
    /// 3. Encode the identifier as the short code
    /// 4. Attach the code to the row
    ///
    /// Identical URLs are not deduplicated; each call creates a new row.
    ///
    /// If step 4 fails the row stays in the store without a code. It can
    /// still be found by id but never by code.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the URL is missing or invalid.
    /// Returns [`AppError::Internal`] on store failures.
    pub async fn shorten(&self, original_url: Option<&str>) -> Result<ShortenedLink, AppError> {
        let original_url = validate_original_url(original_url)?;

        let id = self.repository.insert(&original_url).await?;
        let code = base62::encode(id_to_u64(id)?);

        if let Err(e) = self.repository.attach_code(id, &code).await {
            tracing::error!(id, code = %code, error = %e, "Failed to attach short code, row left without code");
            return Err(AppError::internal(format!(
                "Failed to attach code {code} to row {id}: {e}"
            )));
        }

        tracing::info!(id, code = %code, "Issued short code");

        Ok(ShortenedLink {
            id,
            short_url: self.short_url(&code),
            code,
            original_url,
        })
    }

    /// Resolves a short code to its stored row for redirection.
    ///
    /// The code is matched by stored string equality and is not decoded.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no row carries the code.
    /// Returns [`AppError::Internal`] on store failures.
    pub async fn resolve(&self, code: &str) -> Result<ShortenedUrl, AppError> {
        self.repository
            .find_by_code(code)
            .await?
            .ok_or_else(|| AppError::not_found("URL not found"))
    }

    /// Looks a row up by decoding the code back into its identifier.
    ///
    /// Only the canonical spelling of a code matches: `"01"` decodes to the
    /// same id as `"1"` but is not the stored code, so it is reported as not
    /// found.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the code is not valid base-62.
    /// Returns [`AppError::NotFound`] if no row matches.
    /// Returns [`AppError::Internal`] on store failures.
    pub async fn lookup(&self, code: &str) -> Result<ShortenedUrl, AppError> {
        let id = base62::decode(code)
            .map_err(|_| AppError::bad_request("Invalid short code"))
            .and_then(|n| i64::try_from(n).map_err(|_| AppError::not_found("URL not found")))?;

        match self.repository.find_by_id(id).await? {
            Some(row) if row.short_code.as_deref() == Some(code) => Ok(row),
            _ => Err(AppError::not_found("URL not found")),
        }
    }

    /// Finds a row by identifier, including rows that have no code yet.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on store failures.
    pub async fn find_by_id(&self, id: i64) -> Result<Option<ShortenedUrl>, AppError> {
        self.repository.find_by_id(id).await
    }

    /// Checks that the underlying store answers.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the store is unreachable.
    pub async fn health_check(&self) -> Result<(), AppError> {
        self.repository.ping().await
    }

    /// Builds the public short URL for a code.
    pub fn short_url(&self, code: &str) -> String {
        format!("{}/{}", self.base_host, code)
    }
}

fn id_to_u64(id: i64) -> Result<u64, AppError> {
    u64::try_from(id).map_err(|_| AppError::internal(format!("Store returned negative id {id}")))
}
