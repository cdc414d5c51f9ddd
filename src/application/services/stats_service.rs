//! Best-effort click statistics aggregation.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use chrono::{Duration, NaiveDate, Utc};

use crate::domain::entities::{
    ClickEvent, CountryCount, DailyCount, DeviceCount, ShortUrlStats,
};
use crate::domain::repositories::{ClickEventRepository, ShortUrlRepository};

/// Number of most-recent events sampled per aggregation.
const EVENT_SAMPLE_LIMIT: i64 = 1000;

/// Cap on the country/device frequency tables.
const TOP_N: usize = 10;

/// Length of the daily histogram window, in days.
const HISTOGRAM_DAYS: i64 = 30;

/// Computes per-link statistics from the analytics sink.
///
/// Statistics are a secondary, best-effort feature: every failure path
/// degrades to `None` (logged), so a broken sink can never break the
/// endpoints that matter.
pub struct StatsService {
    short_urls: Arc<dyn ShortUrlRepository>,
    click_events: Arc<dyn ClickEventRepository>,
}

impl StatsService {
    pub fn new(
        short_urls: Arc<dyn ShortUrlRepository>,
        click_events: Arc<dyn ClickEventRepository>,
    ) -> Self {
        Self {
            short_urls,
            click_events,
        }
    }

    /// Returns statistics for a short code.
    ///
    /// `None` when the code does not exist, the record has no linked
    /// analytics, or the datastore/sink is unavailable.
    pub async fn get_stats(&self, code: &str) -> Option<ShortUrlStats> {
        let record = match self.short_urls.find_by_code(code).await {
            Ok(Some(record)) => record,
            Ok(None) => return None,
            Err(e) => {
                tracing::warn!(code, error = %e, "stats record lookup failed");
                return None;
            }
        };

        let link_id = record.link_id.as_deref()?;

        let events = match self
            .click_events
            .list_recent(link_id, EVENT_SAMPLE_LIMIT)
            .await
        {
            Ok(events) => events,
            Err(e) => {
                tracing::warn!(code, link_id, error = %e, "click event query failed");
                return None;
            }
        };

        Some(aggregate(record.clicks, &events, Utc::now().date_naive()))
    }
}

/// Pure aggregation over a sample of recent events.
///
/// `today` anchors the trailing histogram window so the computation stays
/// deterministic under test.
fn aggregate(total_clicks: i64, events: &[ClickEvent], today: NaiveDate) -> ShortUrlStats {
    let unique_clicks = events
        .iter()
        .filter_map(|e| e.clicker_ip.as_deref())
        .collect::<HashSet<_>>()
        .len() as i64;

    let top_countries = top_counts(events.iter().filter_map(|e| e.country.as_deref()))
        .into_iter()
        .map(|(country, clicks)| CountryCount { country, clicks })
        .collect();

    let top_devices = top_counts(events.iter().filter_map(|e| e.device.as_deref()))
        .into_iter()
        .map(|(device, clicks)| DeviceCount { device, clicks })
        .collect();

    let window_start = today - Duration::days(HISTOGRAM_DAYS - 1);

    let mut per_day: HashMap<NaiveDate, i64> = HashMap::new();
    for event in events {
        let date = event.clicked_at.date_naive();
        if date >= window_start && date <= today {
            *per_day.entry(date).or_default() += 1;
        }
    }

    let clicks_by_date = (0..HISTOGRAM_DAYS)
        .map(|offset| {
            let date = window_start + Duration::days(offset);
            DailyCount {
                date,
                clicks: per_day.get(&date).copied().unwrap_or(0),
            }
        })
        .collect();

    ShortUrlStats {
        clicks: total_clicks,
        unique_clicks,
        top_countries,
        top_devices,
        clicks_by_date,
    }
}

/// Frequency table, count-descending with a name-ascending tiebreak,
/// truncated to [`TOP_N`].
fn top_counts<'a>(values: impl Iterator<Item = &'a str>) -> Vec<(String, i64)> {
    let mut counts: HashMap<&str, i64> = HashMap::new();
    for value in values {
        *counts.entry(value).or_default() += 1;
    }

    let mut table: Vec<(String, i64)> = counts
        .into_iter()
        .map(|(value, count)| (value.to_string(), count))
        .collect();

    table.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    table.truncate(TOP_N);
    table
}
