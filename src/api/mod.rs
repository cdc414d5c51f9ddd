//! HTTP layer: DTOs, handlers, and route composition.
//!
//! Handlers translate requests into [`crate::application::services`] calls
//! and map [`crate::error::AppError`] into JSON error responses.

pub mod dto;
pub mod handlers;
pub mod routes;
