//! Click event consumed from the analytics sink.

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;

/// One recorded click on a short link, keyed by the owning `link_id`.
///
/// Rows are written by the surrounding application when it performs the
/// actual redirect; this service only reads them. All client metadata is
/// optional — collectors drop fields freely, and aggregation must cope.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct ClickEvent {
    pub link_id: String,
    pub clicker_ip: Option<String>,
    pub country: Option<String>,
    pub device: Option<String>,
    pub clicked_at: DateTime<Utc>,
}
