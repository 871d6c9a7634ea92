//! # API Error Type
//!
//! Unified error type for HTTP handlers.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in the HTTP layer                         │
//! │                                                                         │
//! │  Handler -> Result<Json<T>, ApiError>                                   │
//! │                                                                         │
//! │  Extractor rejected body/query/path ── ValidationError ──► 422         │
//! │  Repository returned Ok(None) ─────── CoreError::ItemNotFound ──► 404  │
//! │  Pool exhausted (acquire timeout) ── DbError ───────────────► 503     │
//! │  Any other store failure ──────────── DbError ──────────────► 500      │
//! │                                                                         │
//! │  Response body is always { "detail": "<message>" }                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Store error details are logged and never sent to the client.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use tracing::{debug, error, warn};

use portfolio_core::{CoreError, ValidationError};
use portfolio_db::DbError;

/// Message returned with every 404 for a missing item.
pub const ITEM_NOT_FOUND: &str = "Item not found";

/// Error returned from HTTP handlers.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("{0}")]
    Validation(#[from] ValidationError),

    #[error("Item not found")]
    NotFound { id: i64 },

    #[error(transparent)]
    Database(#[from] DbError),
}

/// JSON error body.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub detail: String,
}

impl ApiError {
    /// HTTP status for this error.
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::NotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::Database(e) if e.is_unavailable() => StatusCode::SERVICE_UNAVAILABLE,
            ApiError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<CoreError> for ApiError {
    fn from(error: CoreError) -> Self {
        match error {
            CoreError::ItemNotFound { id } => ApiError::NotFound { id },
            CoreError::Validation(e) => ApiError::Validation(e),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();

        let detail = match &self {
            ApiError::Validation(e) => {
                debug!(error = %e, "Rejected request");
                e.to_string()
            }
            ApiError::NotFound { id } => {
                debug!(id, "Item not found");
                ITEM_NOT_FOUND.to_string()
            }
            ApiError::Database(e) if status == StatusCode::SERVICE_UNAVAILABLE => {
                warn!(error = %e, "Database pool exhausted");
                "Service unavailable".to_string()
            }
            ApiError::Database(e) => {
                error!(error = %e, "Database error");
                "Internal server error".to_string()
            }
        };

        (status, Json(ErrorBody { detail })).into_response()
    }
}

/// Convenience alias for handler results.
pub type ApiResult<T> = Result<T, ApiError>;
