//! Application error taxonomy and its HTTP mapping.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Value, json};

/// JSON envelope for error responses.
#[derive(Serialize)]
struct ErrorBody {
    error: ErrorInfo,
}

/// Machine-readable error payload embedded in every error response.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorInfo {
    pub code: &'static str,
    pub message: String,
    pub details: Value,
}

/// Failure taxonomy for the short-link service.
///
/// Validation variants are detected before any datastore mutation is
/// attempted. [`AppError::Storage`] is surfaced as-is and never retried
/// internally; retrying is the caller's decision.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Destination is malformed or uses a disallowed scheme.
    #[error("invalid URL: {reason}")]
    InvalidUrl { reason: String },

    /// Destination points back into the shortener's own redirect namespace.
    #[error("destination resolves to another short link")]
    CircularReference { url: String },

    /// Caller-supplied code fails the alphanumeric/length pattern.
    #[error("invalid custom code: {reason}")]
    InvalidCustomCode { reason: String },

    /// Requested custom code already exists. Never silently substituted
    /// with a random one.
    #[error("custom code \"{code}\" is already taken")]
    CustomCodeTaken { code: String },

    /// Random generation kept colliding with existing codes. Safe to retry
    /// later; repeated occurrences suggest the code length should grow.
    #[error("could not generate a unique code after {attempts} attempts")]
    CodeGenerationExhausted { attempts: u32 },

    /// No active record for the code. Absent and deactivated records are
    /// deliberately indistinguishable here.
    #[error("short link not found")]
    NotFound,

    /// Record exists but its expiry has passed. Distinct from [`Self::NotFound`]
    /// so callers can render a dedicated "link expired" message.
    #[error("short link has expired")]
    Expired,

    /// Datastore unavailable or a query failed.
    #[error("storage error: {0}")]
    Storage(#[from] sqlx::Error),
}

impl AppError {
    pub fn invalid_url(reason: impl Into<String>) -> Self {
        Self::InvalidUrl {
            reason: reason.into(),
        }
    }

    pub fn invalid_custom_code(reason: impl Into<String>) -> Self {
        Self::InvalidCustomCode {
            reason: reason.into(),
        }
    }

    /// HTTP status for this error kind.
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::InvalidUrl { .. }
            | AppError::CircularReference { .. }
            | AppError::InvalidCustomCode { .. } => StatusCode::BAD_REQUEST,
            AppError::CustomCodeTaken { .. } => StatusCode::CONFLICT,
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::Expired => StatusCode::GONE,
            AppError::CodeGenerationExhausted { .. } | AppError::Storage(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Stable machine-readable error code.
    pub fn code(&self) -> &'static str {
        match self {
            AppError::InvalidUrl { .. } => "invalid_url",
            AppError::CircularReference { .. } => "circular_reference",
            AppError::InvalidCustomCode { .. } => "invalid_custom_code",
            AppError::CustomCodeTaken { .. } => "custom_code_taken",
            AppError::CodeGenerationExhausted { .. } => "code_generation_exhausted",
            AppError::NotFound => "not_found",
            AppError::Expired => "link_expired",
            AppError::Storage(_) => "storage_error",
        }
    }

    /// Builds the payload returned to API clients.
    ///
    /// Storage failures are reported without the underlying driver message.
    pub fn to_error_info(&self) -> ErrorInfo {
        let details = match self {
            AppError::InvalidUrl { reason } | AppError::InvalidCustomCode { reason } => {
                json!({ "reason": reason })
            }
            AppError::CircularReference { url } => json!({ "url": url }),
            AppError::CustomCodeTaken { code } => json!({ "code": code }),
            AppError::CodeGenerationExhausted { attempts } => json!({ "attempts": attempts }),
            _ => json!({}),
        };

        let message = match self {
            AppError::Storage(_) => "Storage backend unavailable".to_string(),
            other => other.to_string(),
        };

        ErrorInfo {
            code: self.code(),
            message,
            details,
        }
    }
}

/// Request DTOs only guard the destination URL field (length bounds); every
/// other input is validated by the service layer with its own error kinds.
impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        AppError::invalid_url(errors.to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if let AppError::Storage(ref e) = self {
            tracing::error!(error = %e, "storage failure");
        }

        let status = self.status();
        let body = ErrorBody {
            error: self.to_error_info(),
        };

        (status, Json(body)).into_response()
    }
}
