//! SQLite implementation of the URL repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::SqlitePool;
use std::sync::Arc;

use crate::domain::entities::ShortenedUrl;
use crate::domain::repositories::UrlRepository;
use crate::error::AppError;

/// SQLite repository for URL mappings.
///
/// Every statement uses bound parameters. `AUTOINCREMENT` on the primary key
/// keeps identifiers monotonic and prevents reuse after deletes.
pub struct SqliteUrlRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteUrlRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct UrlRow {
    id: i64,
    original_url: String,
    short_code: Option<String>,
    created_at: DateTime<Utc>,
}

impl From<UrlRow> for ShortenedUrl {
    fn from(r: UrlRow) -> Self {
        ShortenedUrl::new(r.id, r.original_url, r.short_code, r.created_at)
    }
}

#[async_trait]
impl UrlRepository for SqliteUrlRepository {
    async fn insert(&self, original_url: &str) -> Result<i64, AppError> {
        let result = sqlx::query("INSERT INTO urls (original_url) VALUES (?)")
            .bind(original_url)
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.last_insert_rowid())
    }

    async fn attach_code(&self, id: i64, code: &str) -> Result<(), AppError> {
        let result = sqlx::query("UPDATE urls SET short_code = ? WHERE id = ?")
            .bind(code)
            .bind(id)
            .execute(self.pool.as_ref())
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(format!("No URL with id {id}")));
        }

        Ok(())
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<ShortenedUrl>, AppError> {
        let row = sqlx::query_as::<_, UrlRow>(
            r#"
            SELECT id, original_url, short_code, created_at
            FROM urls
            WHERE short_code = ?
            "#,
        )
        .bind(code)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(ShortenedUrl::from))
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<ShortenedUrl>, AppError> {
        let row = sqlx::query_as::<_, UrlRow>(
            r#"
            SELECT id, original_url, short_code, created_at
            FROM urls
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(ShortenedUrl::from))
    }

    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1").execute(self.pool.as_ref()).await?;
        Ok(())
    }
}
