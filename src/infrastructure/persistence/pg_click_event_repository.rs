//! PostgreSQL implementation of the read-only click event repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::ClickEvent;
use crate::domain::repositories::ClickEventRepository;
use crate::error::AppError;

/// Read-only PostgreSQL view of the `click_events` sink table.
pub struct PgClickEventRepository {
    pool: Arc<PgPool>,
}

impl PgClickEventRepository {
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ClickEventRepository for PgClickEventRepository {
    async fn list_recent(&self, link_id: &str, limit: i64) -> Result<Vec<ClickEvent>, AppError> {
        let events = sqlx::query_as::<_, ClickEvent>(
            r#"
            SELECT link_id, clicker_ip, country, device, clicked_at
            FROM click_events
            WHERE link_id = $1
            ORDER BY clicked_at DESC
            LIMIT $2
            "#,
        )
        .bind(link_id)
        .bind(limit)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(events)
    }
}
