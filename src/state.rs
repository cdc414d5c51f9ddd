//! Shared application state injected into all handlers.

use std::sync::Arc;

use crate::application::services::{ShortenerService, StatsService};

#[derive(Clone)]
pub struct AppState {
    pub shortener: Arc<ShortenerService>,
    pub stats: Arc<StatsService>,
}
