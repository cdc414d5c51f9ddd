//! Repository trait definitions for the domain layer.
//!
//! Traits define the data-access contract; concrete implementations live in
//! `crate::infrastructure::persistence`, and `mockall` generates mocks for
//! service unit tests.

pub mod click_event_repository;
pub mod short_url_repository;

pub use click_event_repository::ClickEventRepository;
pub use short_url_repository::{InsertOutcome, ShortUrlRepository};

#[cfg(test)]
pub use click_event_repository::MockClickEventRepository;
#[cfg(test)]
pub use short_url_repository::MockShortUrlRepository;
