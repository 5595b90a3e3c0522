//! Entity representing a stored URL and its short code.

use chrono::{DateTime, Utc};

use crate::utils::base62;

/// A stored URL mapping.
///
/// `short_code` is `None` between the insert and the follow-up update that
/// attaches the code derived from `id`. Once set it never changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortenedUrl {
    pub id: i64,
    pub original_url: String,
    pub short_code: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl ShortenedUrl {
    /// Creates a new ShortenedUrl instance.
    pub fn new(
        id: i64,
        original_url: String,
        short_code: Option<String>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            original_url,
            short_code,
            created_at,
        }
    }

    /// Returns true if the row can be resolved by its short code.
    pub fn has_code(&self) -> bool {
        self.short_code.is_some()
    }

    /// Returns true if the stored code decodes back to this row's id.
    ///
    /// Rows without a code are never consistent.
    pub fn is_consistent(&self) -> bool {
        let Some(code) = self.short_code.as_deref() else {
            return false;
        };

        matches!(base62::decode(code), Ok(decoded) if i64::try_from(decoded) == Ok(self.id))
    }
}
