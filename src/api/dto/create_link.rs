//! DTOs for the link creation endpoint.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::application::services::CreatedShortUrl;
use crate::domain::entities::CreateShortUrl;

/// Request body for `POST /api/links`.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateShortUrlRequest {
    /// Destination URL. Scheme and structure are checked by the service;
    /// this bound only rejects absurd payloads before they get that far.
    #[validate(length(min = 1, max = 2048, message = "URL must be 1-2048 characters"))]
    pub url: String,

    /// Opaque reference to the owning link entity in the surrounding system.
    pub link_id: Option<String>,

    /// Opaque owner reference, used for listing.
    pub user_id: Option<String>,

    /// Optional custom short code (`[A-Za-z0-9]{3,20}`).
    pub custom_code: Option<String>,

    /// Optional expiry timestamp. After this time, the link returns 410 Gone.
    pub expires_at: Option<DateTime<Utc>>,
}

impl From<CreateShortUrlRequest> for CreateShortUrl {
    fn from(request: CreateShortUrlRequest) -> Self {
        Self {
            original_url: request.url,
            link_id: request.link_id,
            user_id: request.user_id,
            custom_code: request.custom_code,
            expires_at: request.expires_at,
        }
    }
}

/// Response body for a created link.
#[derive(Debug, Serialize)]
pub struct CreateShortUrlResponse {
    pub id: i64,
    pub short_code: String,
    pub short_url: String,
    pub original_url: String,
}

impl From<CreatedShortUrl> for CreateShortUrlResponse {
    fn from(created: CreatedShortUrl) -> Self {
        Self {
            id: created.id,
            short_code: created.short_code,
            short_url: created.short_url,
            original_url: created.original_url,
        }
    }
}
