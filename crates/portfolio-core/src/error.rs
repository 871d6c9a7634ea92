//! # Domain Error Types
//!
//! Errors raised by pure domain logic, before any I/O happens.
//!
//! ## Error Categories
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Domain Errors                                      │
//! │                                                                         │
//! │  CoreError                                                              │
//! │  ├── Validation(ValidationError)   ← bad request body / query           │
//! │  │   ├── Required                                                       │
//! │  │   ├── TooLong                                                        │
//! │  │   └── InvalidFormat                                                  │
//! │  └── ItemNotFound { id }                                                │
//! │                                                                         │
//! │  The HTTP layer maps Validation → 422 and ItemNotFound → 404.           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

/// Errors from domain operations.
#[derive(Debug, Error)]
pub enum CoreError {
    /// No item exists with the given id.
    #[error("Item not found: {id}")]
    ItemNotFound { id: i64 },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These occur when a request body or query does not meet requirements.
/// Always detected before the database is touched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing or blank.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Invalid format (malformed JSON, wrong type, non-integer id).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

impl ValidationError {
    /// Creates an InvalidFormat error.
    pub fn invalid(field: impl Into<String>, reason: impl Into<String>) -> Self {
        ValidationError::InvalidFormat {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
