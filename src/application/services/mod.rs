//! Business logic services for the application layer.

pub mod shortener_service;
pub mod stats_service;

pub use shortener_service::{
    CreatedShortUrl, ResolvedShortUrl, ShortenerOptions, ShortenerService, UserShortUrl,
};
pub use stats_service::StatsService;
