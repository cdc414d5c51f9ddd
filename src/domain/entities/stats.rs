//! Derived statistics for a short link. Never persisted.

use chrono::NaiveDate;
use serde::Serialize;

/// Aggregated click statistics for one short link.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShortUrlStats {
    /// Total clicks, from the record's counter.
    pub clicks: i64,
    /// Distinct visitor identifiers among the sampled recent events.
    pub unique_clicks: i64,
    /// Frequency table, descending, capped at 10 entries.
    pub top_countries: Vec<CountryCount>,
    /// Frequency table, descending, capped at 10 entries.
    pub top_devices: Vec<DeviceCount>,
    /// Daily histogram over the trailing 30-day window, ascending by date,
    /// zero-filled.
    pub clicks_by_date: Vec<DailyCount>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CountryCount {
    pub country: String,
    pub clicks: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DeviceCount {
    pub device: String,
    pub clicks: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailyCount {
    pub date: NaiveDate,
    pub clicks: i64,
}
