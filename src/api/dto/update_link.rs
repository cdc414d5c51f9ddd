//! DTO for the link update endpoint.

use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_with::serde_as;

use crate::domain::entities::ShortUrlPatch;

/// Request body for `PATCH /api/links/{id}`.
///
/// Only the mutable fields are accepted. `short_code` and `original_url`
/// are immutable; `deny_unknown_fields` turns their presence in a payload
/// into a rejection rather than a silent no-op.
///
/// # `expires_at` semantics
///
/// - **Absent** (`expires_at` not in JSON) → leave existing value unchanged
/// - **`null`** → clear expiry (link never expires)
/// - **Timestamp** → set new expiry
#[serde_as]
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UpdateShortUrlRequest {
    /// Toggle the link on or off. Resolving a disabled link behaves exactly
    /// like resolving a nonexistent one.
    pub is_active: Option<bool>,

    /// Expiry timestamp. Absent = no change, null = clear, value = set.
    #[serde(default, with = "::serde_with::rust::double_option")]
    pub expires_at: Option<Option<DateTime<Utc>>>,
}

impl From<UpdateShortUrlRequest> for ShortUrlPatch {
    fn from(request: UpdateShortUrlRequest) -> Self {
        Self {
            is_active: request.is_active,
            expires_at: request.expires_at,
        }
    }
}
