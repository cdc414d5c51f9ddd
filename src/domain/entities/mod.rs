//! Core domain entities for the short-link service.
//!
//! - [`ShortUrlRecord`] - A persisted short code → destination mapping
//! - [`ClickEvent`] - A click row consumed from the analytics sink
//! - [`ShortUrlStats`] - Aggregates derived from click events
//!
//! Creation and update inputs follow the `New*` / `*Patch` pattern:
//! [`NewShortUrl`] for inserts, [`ShortUrlPatch`] for partial updates.

pub mod click_event;
pub mod short_url;
pub mod stats;

pub use click_event::ClickEvent;
pub use short_url::{CreateShortUrl, NewShortUrl, ShortUrlPatch, ShortUrlRecord};
pub use stats::{CountryCount, DailyCount, DeviceCount, ShortUrlStats};
