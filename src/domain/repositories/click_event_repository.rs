//! Repository trait for the read-only analytics sink.

use crate::domain::entities::ClickEvent;
use crate::error::AppError;
use async_trait::async_trait;

/// Read-only access to recorded click events.
///
/// The sink is written by the surrounding application; this service only
/// samples recent rows to compute statistics.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ClickEventRepository: Send + Sync {
    /// Returns the most recent events for a link, ordered by `clicked_at`
    /// descending, capped at `limit`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Storage`] on datastore errors.
    async fn list_recent(&self, link_id: &str, limit: i64) -> Result<Vec<ClickEvent>, AppError>;
}
