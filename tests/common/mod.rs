#![allow(dead_code)]

//! Shared test fixtures: in-memory repository fakes and state construction.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::Utc;

use biolink_shortener::application::services::{
    ShortenerOptions, ShortenerService, StatsService,
};
use biolink_shortener::domain::entities::{
    ClickEvent, NewShortUrl, ShortUrlPatch, ShortUrlRecord,
};
use biolink_shortener::domain::repositories::{
    ClickEventRepository, InsertOutcome, ShortUrlRepository,
};
use biolink_shortener::error::AppError;
use biolink_shortener::state::AppState;

/// Base origin the test state resolves short URLs against.
pub const TEST_BASE_URL: &str = "http://localhost:3000";

/// In-memory stand-in for the PostgreSQL short URL repository.
///
/// Mirrors the datastore contract the service relies on: insert is decided
/// under one lock (the unique-index stand-in) and increments are atomic.
pub struct MemoryShortUrlRepository {
    state: Mutex<MemoryState>,
}

struct MemoryState {
    rows: Vec<ShortUrlRecord>,
    next_id: i64,
}

impl MemoryShortUrlRepository {
    pub fn new() -> Self {
        Self {
            state: Mutex::new(MemoryState {
                rows: Vec::new(),
                next_id: 1,
            }),
        }
    }

    /// Current click counter for a code, for assertions.
    pub fn clicks_of(&self, code: &str) -> Option<i64> {
        self.state
            .lock()
            .unwrap()
            .rows
            .iter()
            .find(|r| r.short_code == code)
            .map(|r| r.clicks)
    }

    pub fn record_count(&self) -> usize {
        self.state.lock().unwrap().rows.len()
    }
}

#[async_trait]
impl ShortUrlRepository for MemoryShortUrlRepository {
    async fn insert(&self, new: NewShortUrl) -> Result<InsertOutcome, AppError> {
        let mut state = self.state.lock().unwrap();

        if state.rows.iter().any(|r| r.short_code == new.short_code) {
            return Ok(InsertOutcome::CodeTaken);
        }

        let record = ShortUrlRecord {
            id: state.next_id,
            short_code: new.short_code,
            original_url: new.original_url,
            link_id: new.link_id,
            user_id: new.user_id,
            clicks: 0,
            is_active: true,
            expires_at: new.expires_at,
            created_at: Utc::now(),
        };

        state.next_id += 1;
        state.rows.push(record.clone());

        Ok(InsertOutcome::Inserted(record))
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<ShortUrlRecord>, AppError> {
        let state = self.state.lock().unwrap();
        Ok(state.rows.iter().find(|r| r.short_code == code).cloned())
    }

    async fn find_active_by_code(&self, code: &str) -> Result<Option<ShortUrlRecord>, AppError> {
        let state = self.state.lock().unwrap();
        Ok(state
            .rows
            .iter()
            .find(|r| r.short_code == code && r.is_active)
            .cloned())
    }

    async fn increment_clicks(&self, id: i64, amount: i64) -> Result<ShortUrlRecord, AppError> {
        let mut state = self.state.lock().unwrap();

        let record = state
            .rows
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or(AppError::NotFound)?;

        record.clicks += amount;
        Ok(record.clone())
    }

    async fn update(&self, id: i64, patch: ShortUrlPatch) -> Result<ShortUrlRecord, AppError> {
        let mut state = self.state.lock().unwrap();

        let record = state
            .rows
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or(AppError::NotFound)?;

        if let Some(is_active) = patch.is_active {
            record.is_active = is_active;
        }
        if let Some(expires_at) = patch.expires_at {
            record.expires_at = expires_at;
        }

        Ok(record.clone())
    }

    async fn delete(&self, id: i64) -> Result<(), AppError> {
        let mut state = self.state.lock().unwrap();

        let before = state.rows.len();
        state.rows.retain(|r| r.id != id);

        if state.rows.len() == before {
            return Err(AppError::NotFound);
        }

        Ok(())
    }

    async fn list_by_user(
        &self,
        user_id: &str,
        limit: i64,
    ) -> Result<Vec<ShortUrlRecord>, AppError> {
        let state = self.state.lock().unwrap();

        let mut records: Vec<ShortUrlRecord> = state
            .rows
            .iter()
            .filter(|r| r.user_id.as_deref() == Some(user_id))
            .cloned()
            .collect();

        // Newest first; id breaks ties created within the same instant.
        records.sort_by(|a, b| (b.created_at, b.id).cmp(&(a.created_at, a.id)));
        records.truncate(limit as usize);

        Ok(records)
    }

    async fn ping(&self) -> Result<(), AppError> {
        Ok(())
    }
}

/// In-memory stand-in for the read-only analytics sink.
pub struct MemoryClickEventRepository {
    events: Vec<ClickEvent>,
}

impl MemoryClickEventRepository {
    pub fn new(events: Vec<ClickEvent>) -> Self {
        Self { events }
    }
}

#[async_trait]
impl ClickEventRepository for MemoryClickEventRepository {
    async fn list_recent(&self, link_id: &str, limit: i64) -> Result<Vec<ClickEvent>, AppError> {
        let mut events: Vec<ClickEvent> = self
            .events
            .iter()
            .filter(|e| e.link_id == link_id)
            .cloned()
            .collect();

        events.sort_by(|a, b| b.clicked_at.cmp(&a.clicked_at));
        events.truncate(limit as usize);

        Ok(events)
    }
}

/// Builds an [`AppState`] over in-memory repositories, returning the short
/// URL repository handle for direct assertions.
pub fn create_test_state(
    click_events: Vec<ClickEvent>,
) -> (AppState, Arc<MemoryShortUrlRepository>) {
    let short_urls = Arc::new(MemoryShortUrlRepository::new());
    let sink = Arc::new(MemoryClickEventRepository::new(click_events));

    let options = ShortenerOptions {
        base_url: TEST_BASE_URL.to_string(),
        ..ShortenerOptions::default()
    };

    let state = AppState {
        shortener: Arc::new(ShortenerService::new(short_urls.clone(), options)),
        stats: Arc::new(StatsService::new(short_urls.clone(), sink)),
    };

    (state, short_urls)
}
