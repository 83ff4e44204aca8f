//! PostgreSQL implementation of the URL repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::UrlRecord;
use crate::domain::error::RegistryError;
use crate::domain::repositories::{StoreSummary, UrlRepository};
use crate::utils::db_error::classify_sqlx_error;

/// Row shape of the `urls` table.
#[derive(sqlx::FromRow)]
struct UrlRow {
    code: String,
    original_url: String,
    title: String,
    clicks: i64,
    created_at: DateTime<Utc>,
}

impl From<UrlRow> for UrlRecord {
    fn from(r: UrlRow) -> Self {
        UrlRecord::new(r.code, r.original_url, r.title, r.clicks, r.created_at)
    }
}

/// PostgreSQL repository for URL records.
///
/// `code` is the primary key. Inserts use `ON CONFLICT DO NOTHING` so an
/// occupied code is reported instead of overwritten, and click increments are
/// a single `UPDATE ... SET clicks = clicks + 1` statement.
pub struct PgUrlRepository {
    pool: Arc<PgPool>,
}

impl PgUrlRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UrlRepository for PgUrlRepository {
    async fn insert(&self, record: UrlRecord) -> Result<UrlRecord, RegistryError> {
        let row = sqlx::query_as::<_, UrlRow>(
            r#"
            INSERT INTO urls (code, original_url, title, clicks, created_at)
            VALUES ($1, $2, $3, $4, $5)
            ON CONFLICT (code) DO NOTHING
            RETURNING code, original_url, title, clicks, created_at
            "#,
        )
        .bind(&record.code)
        .bind(&record.original_url)
        .bind(&record.title)
        .bind(record.clicks)
        .bind(record.created_at)
        .fetch_optional(self.pool.as_ref())
        .await
        .map_err(|e| classify_sqlx_error(e, &record.code))?;

        match row {
            Some(row) => Ok(row.into()),
            None => Err(RegistryError::Conflict(record.code)),
        }
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<UrlRecord>, RegistryError> {
        let row = sqlx::query_as::<_, UrlRow>(
            r#"
            SELECT code, original_url, title, clicks, created_at
            FROM urls
            WHERE code = $1
            "#,
        )
        .bind(code)
        .fetch_optional(self.pool.as_ref())
        .await
        .map_err(|e| classify_sqlx_error(e, code))?;

        Ok(row.map(UrlRecord::from))
    }

    async fn increment_clicks(&self, code: &str) -> Result<Option<UrlRecord>, RegistryError> {
        let row = sqlx::query_as::<_, UrlRow>(
            r#"
            UPDATE urls
            SET clicks = clicks + 1
            WHERE code = $1
            RETURNING code, original_url, title, clicks, created_at
            "#,
        )
        .bind(code)
        .fetch_optional(self.pool.as_ref())
        .await
        .map_err(|e| classify_sqlx_error(e, code))?;

        Ok(row.map(UrlRecord::from))
    }

    async fn summary(&self) -> Result<StoreSummary, RegistryError> {
        let (records, clicks): (i64, i64) = sqlx::query_as(
            "SELECT COUNT(*)::BIGINT, COALESCE(SUM(clicks), 0)::BIGINT FROM urls",
        )
        .fetch_one(self.pool.as_ref())
        .await
        .map_err(|e| classify_sqlx_error(e, ""))?;

        Ok(StoreSummary { records, clicks })
    }

    async fn ping(&self) -> Result<(), RegistryError> {
        sqlx::query("SELECT 1")
            .execute(self.pool.as_ref())
            .await
            .map_err(|e| classify_sqlx_error(e, ""))?;

        Ok(())
    }

    fn backend_name(&self) -> &'static str {
        "postgres"
    }
}
