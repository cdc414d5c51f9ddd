//! Application layer orchestrating domain operations.
//!
//! Services consume the repository traits from [`crate::domain`] and expose
//! the operations the HTTP handlers call:
//!
//! - [`services::ShortenerService`] - Creation, resolution, mutation, listing
//! - [`services::StatsService`] - Best-effort click statistics

pub mod services;
