//! Short code generation and validation.
//!
//! Generation is stateless; collision handling belongs to the registry's
//! bounded insert-retry loop, not here.

use std::sync::LazyLock;

use rand::distr::{Alphanumeric, SampleString};
use regex::Regex;

use crate::error::AppError;

/// Default length of generated codes. 62^6 ≈ 5.7e10 keeps the collision
/// probability negligible at bio-link scale.
pub const DEFAULT_CODE_LENGTH: usize = 6;

/// Pattern a caller-supplied custom code must match.
static CUSTOM_CODE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9]{3,20}$").unwrap());

/// Generates a random alphanumeric short code of the given length.
///
/// Draws from the operating system CSPRNG via [`rand::rng`]; codes must not
/// be guessable, or disabled/unlisted links become enumerable.
pub fn generate_code(length: usize) -> String {
    Alphanumeric.sample_string(&mut rand::rng(), length)
}

/// Validates a caller-supplied custom short code.
///
/// Codes are 3–20 ASCII letters or digits, case-sensitive. A valid code is
/// accepted as-is; whether it is *available* is decided by the datastore's
/// unique index at insert time.
///
/// # Errors
///
/// Returns [`AppError::InvalidCustomCode`] when the pattern is violated.
pub fn validate_custom_code(code: &str) -> Result<(), AppError> {
    if CUSTOM_CODE_REGEX.is_match(code) {
        return Ok(());
    }

    if code.len() < 3 || code.len() > 20 {
        return Err(AppError::invalid_custom_code(format!(
            "must be 3-20 characters, got {}",
            code.len()
        )));
    }

    Err(AppError::invalid_custom_code(
        "only ASCII letters and digits are allowed",
    ))
}
