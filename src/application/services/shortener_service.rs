//! Short-URL registry: creation, resolution, mutation, listing.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use url::Url;

use crate::domain::entities::{CreateShortUrl, NewShortUrl, ShortUrlPatch, ShortUrlRecord};
use crate::domain::repositories::{InsertOutcome, ShortUrlRepository};
use crate::error::AppError;
use crate::utils::base_url::REDIRECT_PREFIX;
use crate::utils::code_generator::{self, DEFAULT_CODE_LENGTH};
use crate::utils::url_normalizer::normalize_url;

/// Tunables for the registry.
#[derive(Debug, Clone)]
pub struct ShortenerOptions {
    /// Public origin baked into returned short URLs.
    pub base_url: String,
    /// Length of generated codes.
    pub code_length: usize,
    /// Upper bound of the collision-retry loop for generated codes.
    pub max_generation_attempts: u32,
    /// Cap applied to per-user listings.
    pub list_page_size: i64,
}

impl Default for ShortenerOptions {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:3000".to_string(),
            code_length: DEFAULT_CODE_LENGTH,
            max_generation_attempts: 5,
            list_page_size: 100,
        }
    }
}

/// Result of a successful creation.
#[derive(Debug, Clone)]
pub struct CreatedShortUrl {
    pub id: i64,
    pub short_code: String,
    pub short_url: String,
    pub original_url: String,
}

/// Result of a successful resolution: what the caller needs to issue the
/// HTTP redirect and record analytics downstream.
#[derive(Debug, Clone)]
pub struct ResolvedShortUrl {
    pub original_url: String,
    pub link_id: Option<String>,
}

/// A listed record annotated with its externally resolvable short URL.
#[derive(Debug, Clone)]
pub struct UserShortUrl {
    pub short_url: String,
    pub record: ShortUrlRecord,
}

/// Orchestrates the short-link lifecycle over the datastore.
///
/// The service is stateless; the unique index on `short_code` is the only
/// shared mutable state the design relies on. Storage failures surface as
/// [`AppError::Storage`] and are never retried here.
pub struct ShortenerService {
    repository: Arc<dyn ShortUrlRepository>,
    options: ShortenerOptions,
    own_origin: Option<Url>,
}

impl ShortenerService {
    pub fn new(repository: Arc<dyn ShortUrlRepository>, options: ShortenerOptions) -> Self {
        let own_origin = Url::parse(&options.base_url).ok();

        Self {
            repository,
            options,
            own_origin,
        }
    }

    /// Creates a short URL for a validated, normalized destination.
    ///
    /// With a `custom_code`, exactly one insert is attempted: a uniqueness
    /// violation is reported as [`AppError::CustomCodeTaken`], never papered
    /// over with a random code. Without one, a fresh random code is minted
    /// per attempt, bounded by `max_generation_attempts`.
    ///
    /// # Errors
    ///
    /// [`AppError::InvalidUrl`], [`AppError::CircularReference`],
    /// [`AppError::InvalidCustomCode`], [`AppError::CustomCodeTaken`],
    /// [`AppError::CodeGenerationExhausted`], [`AppError::Storage`].
    pub async fn create_short_url(
        &self,
        request: CreateShortUrl,
    ) -> Result<CreatedShortUrl, AppError> {
        let CreateShortUrl {
            original_url,
            link_id,
            user_id,
            custom_code,
            expires_at,
        } = request;

        let normalized =
            normalize_url(&original_url).map_err(|e| AppError::invalid_url(e.to_string()))?;

        self.reject_self_reference(&normalized)?;

        let record = if let Some(custom) = custom_code {
            code_generator::validate_custom_code(&custom)?;

            let new = NewShortUrl {
                short_code: custom.clone(),
                original_url: normalized,
                link_id,
                user_id,
                expires_at,
            };

            match self.repository.insert(new).await? {
                InsertOutcome::Inserted(record) => record,
                InsertOutcome::CodeTaken => {
                    return Err(AppError::CustomCodeTaken { code: custom });
                }
            }
        } else {
            self.insert_with_generated_code(normalized, link_id, user_id, expires_at)
                .await?
        };

        let short_url = self.short_url_for(&record.short_code);

        Ok(CreatedShortUrl {
            id: record.id,
            short_code: record.short_code,
            short_url,
            original_url: record.original_url,
        })
    }

    /// Resolves a short code for redirecting, counting the click.
    ///
    /// Inactive records are filtered at the lookup, so they fail with the
    /// same [`AppError::NotFound`] as absent codes. The expiry check runs
    /// before the increment — an expired hit never counts.
    ///
    /// # Errors
    ///
    /// [`AppError::NotFound`], [`AppError::Expired`], [`AppError::Storage`].
    pub async fn resolve_short_url(&self, code: &str) -> Result<ResolvedShortUrl, AppError> {
        let record = self
            .repository
            .find_active_by_code(code)
            .await?
            .ok_or(AppError::NotFound)?;

        if record.is_expired() {
            return Err(AppError::Expired);
        }

        let record = self.repository.increment_clicks(record.id, 1).await?;

        tracing::debug!(code, clicks = record.clicks, "resolved short code");

        Ok(ResolvedShortUrl {
            original_url: record.original_url,
            link_id: record.link_id,
        })
    }

    /// Applies a partial update to the mutable fields of a record.
    ///
    /// # Errors
    ///
    /// [`AppError::NotFound`], [`AppError::Storage`].
    pub async fn update_short_url(
        &self,
        id: i64,
        patch: ShortUrlPatch,
    ) -> Result<ShortUrlRecord, AppError> {
        self.repository.update(id, patch).await
    }

    /// Hard-deletes a record. A second delete of the same id fails with
    /// [`AppError::NotFound`].
    pub async fn delete_short_url(&self, id: i64) -> Result<(), AppError> {
        self.repository.delete(id).await
    }

    /// Lists a user's short URLs, newest first, capped at the configured
    /// page size, each annotated with its computed short URL.
    pub async fn list_user_short_urls(
        &self,
        user_id: &str,
    ) -> Result<Vec<UserShortUrl>, AppError> {
        let records = self
            .repository
            .list_by_user(user_id, self.options.list_page_size)
            .await?;

        Ok(records
            .into_iter()
            .map(|record| UserShortUrl {
                short_url: self.short_url_for(&record.short_code),
                record,
            })
            .collect())
    }

    /// Datastore connectivity probe for the health endpoint.
    pub async fn health(&self) -> Result<(), AppError> {
        self.repository.ping().await
    }

    /// Builds the externally resolvable URL for a code.
    pub fn short_url_for(&self, code: &str) -> String {
        format!(
            "{}{}/{}",
            self.options.base_url.trim_end_matches('/'),
            REDIRECT_PREFIX,
            code
        )
    }

    /// Inserts with a freshly generated code, retrying on collision.
    ///
    /// Plain bounded loop, no backoff: at the default length the collision
    /// probability is already small, and a retry mints an independent code.
    async fn insert_with_generated_code(
        &self,
        original_url: String,
        link_id: Option<String>,
        user_id: Option<String>,
        expires_at: Option<DateTime<Utc>>,
    ) -> Result<ShortUrlRecord, AppError> {
        let attempts = self.options.max_generation_attempts;

        for attempt in 1..=attempts {
            let new = NewShortUrl {
                short_code: code_generator::generate_code(self.options.code_length),
                original_url: original_url.clone(),
                link_id: link_id.clone(),
                user_id: user_id.clone(),
                expires_at,
            };

            match self.repository.insert(new).await? {
                InsertOutcome::Inserted(record) => return Ok(record),
                InsertOutcome::CodeTaken => {
                    tracing::debug!(attempt, "generated code collided, regenerating");
                }
            }
        }

        Err(AppError::CodeGenerationExhausted { attempts })
    }

    /// Rejects destinations that point back into this service's own
    /// redirect namespace. Single hop only; chains through other hosts are
    /// not chased.
    fn reject_self_reference(&self, normalized: &str) -> Result<(), AppError> {
        let Some(own) = &self.own_origin else {
            return Ok(());
        };
        let Ok(url) = Url::parse(normalized) else {
            return Ok(());
        };

        if !matches!(url.scheme(), "http" | "https") {
            return Ok(());
        }

        let same_host = url.host_str().is_some() && url.host_str() == own.host_str();
        let same_port = url.port_or_known_default() == own.port_or_known_default();
        let redirect_path = url.path().starts_with(&format!("{REDIRECT_PREFIX}/"));

        if same_host && same_port && redirect_path {
            return Err(AppError::CircularReference {
                url: normalized.to_string(),
            });
        }

        Ok(())
    }
}
