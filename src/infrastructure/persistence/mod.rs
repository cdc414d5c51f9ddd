//! PostgreSQL repository implementations.
//!
//! - [`PgShortUrlRepository`] - Short URL storage, unique-index inserts,
//!   atomic click accounting
//! - [`PgClickEventRepository`] - Read-only access to the analytics sink

pub mod pg_click_event_repository;
pub mod pg_short_url_repository;

pub use pg_click_event_repository::PgClickEventRepository;
pub use pg_short_url_repository::PgShortUrlRepository;
