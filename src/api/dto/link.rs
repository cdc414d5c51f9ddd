//! Shared link representation for listing and update responses.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::application::services::UserShortUrl;
use crate::domain::entities::ShortUrlRecord;

/// JSON representation of a short link.
#[derive(Debug, Serialize)]
pub struct ShortUrlResponse {
    pub id: i64,
    pub short_code: String,
    pub short_url: String,
    pub original_url: String,
    pub clicks: i64,
    pub is_active: bool,
    pub expires_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl ShortUrlResponse {
    pub fn from_record(record: ShortUrlRecord, short_url: String) -> Self {
        Self {
            id: record.id,
            short_code: record.short_code,
            short_url,
            original_url: record.original_url,
            clicks: record.clicks,
            is_active: record.is_active,
            expires_at: record.expires_at,
            created_at: record.created_at,
        }
    }
}

impl From<UserShortUrl> for ShortUrlResponse {
    fn from(listed: UserShortUrl) -> Self {
        Self::from_record(listed.record, listed.short_url)
    }
}

/// Query parameters for `GET /api/links`.
#[derive(Debug, Deserialize)]
pub struct ListLinksQuery {
    pub user_id: String,
}
