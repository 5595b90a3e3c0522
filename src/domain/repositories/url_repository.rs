//! Repository trait for URL mapping storage.

use crate::domain::entities::ShortenedUrl;
use crate::error::AppError;
use async_trait::async_trait;

/// Storage contract for [`ShortenedUrl`] rows.
///
/// Identifiers are assigned by the store, are positive, increase with every
/// insert and are never reused. Each operation is atomic on its own; nothing
/// ties an [`insert`](Self::insert) to the [`attach_code`](Self::attach_code)
/// that follows it.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::SqliteUrlRepository`] - SQLite implementation
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/repository_url.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UrlRepository: Send + Sync {
    /// Stores a new row with a null short code and returns its identifier.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn insert(&self, original_url: &str) -> Result<i64, AppError>;

    /// Sets the short code of an existing row.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no row has the given id.
    /// Returns [`AppError::Internal`] on database errors, including a code
    /// that is already taken by another row.
    async fn attach_code(&self, id: i64, code: &str) -> Result<(), AppError>;

    /// Finds the row whose short code equals `code`.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(ShortenedUrl))` if found
    /// - `Ok(None)` if not found
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_code(&self, code: &str) -> Result<Option<ShortenedUrl>, AppError>;

    /// Finds a row by identifier, whether or not a code is attached yet.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_id(&self, id: i64) -> Result<Option<ShortenedUrl>, AppError>;

    /// Checks that the store is reachable.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the store cannot answer a trivial query.
    async fn ping(&self) -> Result<(), AppError>;
}
