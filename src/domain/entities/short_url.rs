//! Short URL entity: the persisted code → destination mapping.

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;

/// A persisted short URL record.
///
/// `short_code` and `original_url` are immutable after creation; `clicks` is
/// mutated only by the atomic increment during resolution.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct ShortUrlRecord {
    pub id: i64,
    pub short_code: String,
    pub original_url: String,
    /// Opaque reference to the owning link entity in the surrounding system;
    /// keys the analytics sink.
    pub link_id: Option<String>,
    /// Opaque owner reference, used only for listing.
    pub user_id: Option<String>,
    pub clicks: i64,
    pub is_active: bool,
    pub expires_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl ShortUrlRecord {
    /// True once the expiry timestamp, if any, has passed.
    pub fn is_expired(&self) -> bool {
        self.expires_at.is_some_and(|e| Utc::now() >= e)
    }
}

/// Input data for inserting a new record.
#[derive(Debug, Clone)]
pub struct NewShortUrl {
    pub short_code: String,
    pub original_url: String,
    pub link_id: Option<String>,
    pub user_id: Option<String>,
    pub expires_at: Option<DateTime<Utc>>,
}

/// A creation request as received from the caller, before validation.
#[derive(Debug, Clone, Default)]
pub struct CreateShortUrl {
    pub original_url: String,
    pub link_id: Option<String>,
    pub user_id: Option<String>,
    pub custom_code: Option<String>,
    pub expires_at: Option<DateTime<Utc>>,
}

/// Partial update for an existing record.
///
/// Only the mutable fields exist here; the immutable `short_code` and
/// `original_url` cannot be expressed at all.
///
/// `expires_at: Some(None)` clears the expiry; `Some(Some(t))` sets it;
/// `None` leaves it unchanged.
#[derive(Debug, Clone, Default)]
pub struct ShortUrlPatch {
    pub is_active: Option<bool>,
    pub expires_at: Option<Option<DateTime<Utc>>>,
}
