//! Repository trait for short URL data access.

use crate::domain::entities::{NewShortUrl, ShortUrlPatch, ShortUrlRecord};
use crate::error::AppError;
use async_trait::async_trait;

/// Outcome of a uniqueness-enforcing insert.
///
/// The unique index on `short_code` is the tie-breaker for concurrent
/// inserts of the same code: exactly one caller gets [`Self::Inserted`],
/// every other one gets [`Self::CodeTaken`]. Implementations must never
/// check-then-insert.
#[derive(Debug, Clone)]
pub enum InsertOutcome {
    Inserted(ShortUrlRecord),
    CodeTaken,
}

/// Repository interface for short URL records.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgShortUrlRepository`] - PostgreSQL
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ShortUrlRepository: Send + Sync {
    /// Inserts a new record, letting the unique index decide code ownership.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Storage`] on datastore errors. A code collision is
    /// NOT an error — it is reported as [`InsertOutcome::CodeTaken`] so the
    /// registry can distinguish retry-worthy collisions from real failures.
    async fn insert(&self, new: NewShortUrl) -> Result<InsertOutcome, AppError>;

    /// Finds a record by its short code regardless of active state.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Storage`] on datastore errors.
    async fn find_by_code(&self, code: &str) -> Result<Option<ShortUrlRecord>, AppError>;

    /// Finds a record by its short code, restricted to `is_active = true`.
    ///
    /// Deactivated records are filtered out here, at the query, so callers
    /// cannot observe the difference between absent and inactive.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Storage`] on datastore errors.
    async fn find_active_by_code(&self, code: &str) -> Result<Option<ShortUrlRecord>, AppError>;

    /// Atomically adds `amount` to the record's click counter.
    ///
    /// Must be a single datastore-side increment — concurrent resolutions of
    /// a popular link would lose updates under read-modify-write.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the record vanished,
    /// [`AppError::Storage`] on datastore errors.
    async fn increment_clicks(&self, id: i64, amount: i64) -> Result<ShortUrlRecord, AppError>;

    /// Partially updates the mutable fields of a record.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no record matches `id`,
    /// [`AppError::Storage`] on datastore errors.
    async fn update(&self, id: i64, patch: ShortUrlPatch) -> Result<ShortUrlRecord, AppError>;

    /// Hard-deletes a record.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no record matches `id` — deleting
    /// twice legitimately fails the second time.
    async fn delete(&self, id: i64) -> Result<(), AppError>;

    /// Lists a user's records, newest first, capped at `limit`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Storage`] on datastore errors.
    async fn list_by_user(
        &self,
        user_id: &str,
        limit: i64,
    ) -> Result<Vec<ShortUrlRecord>, AppError>;

    /// Cheap connectivity probe for the health endpoint.
    async fn ping(&self) -> Result<(), AppError>;
}
