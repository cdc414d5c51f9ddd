//! Destination URL validation and canonicalization.
//!
//! Every destination is normalized here before it is persisted, so equal
//! inputs always produce byte-equal stored URLs.

use url::Url;

/// Schemes a bio-link destination may use. Anything else — in particular
/// `javascript:`, `data:` and `file:` — is capable of script injection or
/// local resource access and is rejected outright.
const ALLOWED_SCHEMES: &[&str] = &["http", "https", "mailto", "tel"];

/// Errors that can occur during URL normalization.
#[derive(Debug, thiserror::Error)]
pub enum UrlNormalizationError {
    #[error("invalid URL format: {0}")]
    InvalidFormat(String),

    #[error("scheme \"{0}\" is not allowed")]
    UnsupportedScheme(String),
}

/// Normalizes a URL to a canonical form.
///
/// # Normalization Rules
///
/// 1. **Scheme**: only `http`, `https`, `mailto`, `tel`; lowercased
/// 2. **Hostname**: lowercased (when the scheme has one)
/// 3. **Default ports**: removed (80 for HTTP, 443 for HTTPS)
/// 4. **Path, query, fragment**: preserved as-is
///
/// Normalization is deterministic and idempotent: feeding the output back in
/// returns the same string.
///
/// # Errors
///
/// [`UrlNormalizationError::InvalidFormat`] for empty, whitespace-only, or
/// relative/unparsable input; [`UrlNormalizationError::UnsupportedScheme`]
/// for any scheme outside the allow-list.
pub fn normalize_url(input: &str) -> Result<String, UrlNormalizationError> {
    let url =
        Url::parse(input).map_err(|e| UrlNormalizationError::InvalidFormat(e.to_string()))?;

    // The parser already lowercases scheme and host and drops default ports;
    // serializing the parsed form is what makes this idempotent.
    if !ALLOWED_SCHEMES.contains(&url.scheme()) {
        return Err(UrlNormalizationError::UnsupportedScheme(
            url.scheme().to_string(),
        ));
    }

    Ok(url.to_string())
}
