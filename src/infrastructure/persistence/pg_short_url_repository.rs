//! PostgreSQL implementation of the short URL repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{NewShortUrl, ShortUrlPatch, ShortUrlRecord};
use crate::domain::repositories::{InsertOutcome, ShortUrlRepository};
use crate::error::AppError;
use crate::utils::db_error::is_unique_violation_on_code;

/// PostgreSQL repository for `short_urls`.
///
/// Uses prepared statements throughout; code uniqueness is enforced by the
/// `short_urls_short_code_key` index, never by a prior read.
pub struct PgShortUrlRepository {
    pool: Arc<PgPool>,
}

impl PgShortUrlRepository {
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ShortUrlRepository for PgShortUrlRepository {
    async fn insert(&self, new: NewShortUrl) -> Result<InsertOutcome, AppError> {
        let result = sqlx::query_as::<_, ShortUrlRecord>(
            r#"
            INSERT INTO short_urls (short_code, original_url, link_id, user_id, expires_at)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, short_code, original_url, link_id, user_id,
                      clicks, is_active, expires_at, created_at
            "#,
        )
        .bind(&new.short_code)
        .bind(&new.original_url)
        .bind(&new.link_id)
        .bind(&new.user_id)
        .bind(new.expires_at)
        .fetch_one(self.pool.as_ref())
        .await;

        match result {
            Ok(record) => Ok(InsertOutcome::Inserted(record)),
            Err(e) if is_unique_violation_on_code(&e) => Ok(InsertOutcome::CodeTaken),
            Err(e) => Err(e.into()),
        }
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<ShortUrlRecord>, AppError> {
        let record = sqlx::query_as::<_, ShortUrlRecord>(
            r#"
            SELECT id, short_code, original_url, link_id, user_id,
                   clicks, is_active, expires_at, created_at
            FROM short_urls
            WHERE short_code = $1
            "#,
        )
        .bind(code)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(record)
    }

    async fn find_active_by_code(&self, code: &str) -> Result<Option<ShortUrlRecord>, AppError> {
        let record = sqlx::query_as::<_, ShortUrlRecord>(
            r#"
            SELECT id, short_code, original_url, link_id, user_id,
                   clicks, is_active, expires_at, created_at
            FROM short_urls
            WHERE short_code = $1 AND is_active = TRUE
            "#,
        )
        .bind(code)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(record)
    }

    async fn increment_clicks(&self, id: i64, amount: i64) -> Result<ShortUrlRecord, AppError> {
        // One statement: concurrent resolutions serialize on the row, and
        // N increments always add exactly N.
        let record = sqlx::query_as::<_, ShortUrlRecord>(
            r#"
            UPDATE short_urls
            SET clicks = clicks + $2
            WHERE id = $1
            RETURNING id, short_code, original_url, link_id, user_id,
                      clicks, is_active, expires_at, created_at
            "#,
        )
        .bind(id)
        .bind(amount)
        .fetch_optional(self.pool.as_ref())
        .await?;

        record.ok_or(AppError::NotFound)
    }

    async fn update(&self, id: i64, patch: ShortUrlPatch) -> Result<ShortUrlRecord, AppError> {
        let set_expiry = patch.expires_at.is_some();
        let expires_at = patch.expires_at.flatten();

        let record = sqlx::query_as::<_, ShortUrlRecord>(
            r#"
            UPDATE short_urls
            SET is_active  = COALESCE($2, is_active),
                expires_at = CASE WHEN $3 THEN $4 ELSE expires_at END
            WHERE id = $1
            RETURNING id, short_code, original_url, link_id, user_id,
                      clicks, is_active, expires_at, created_at
            "#,
        )
        .bind(id)
        .bind(patch.is_active)
        .bind(set_expiry)
        .bind(expires_at)
        .fetch_optional(self.pool.as_ref())
        .await?;

        record.ok_or(AppError::NotFound)
    }

    async fn delete(&self, id: i64) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM short_urls WHERE id = $1")
            .bind(id)
            .execute(self.pool.as_ref())
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound);
        }

        Ok(())
    }

    async fn list_by_user(
        &self,
        user_id: &str,
        limit: i64,
    ) -> Result<Vec<ShortUrlRecord>, AppError> {
        let records = sqlx::query_as::<_, ShortUrlRecord>(
            r#"
            SELECT id, short_code, original_url, link_id, user_id,
                   clicks, is_active, expires_at, created_at
            FROM short_urls
            WHERE user_id = $1
            ORDER BY created_at DESC
            LIMIT $2
            "#,
        )
        .bind(user_id)
        .bind(limit)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(records)
    }

    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1").execute(self.pool.as_ref()).await?;
        Ok(())
    }
}
