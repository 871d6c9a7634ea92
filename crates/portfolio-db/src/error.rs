//! # Database Error Types
//!
//! Error types for database operations.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  Postgres / SQLite error (sqlx::Error)                                 │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  DbError (this module) ← Adds context and categorization               │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ApiError (in apps/api) ← 500 / 503 with an opaque body                │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! A missing row is never a `DbError`: repositories return `Ok(None)`.

use sqlx::error::ErrorKind;
use thiserror::Error;

/// Database operation errors.
#[derive(Debug, Error)]
pub enum DbError {
    /// Unique constraint violation.
    #[error("Unique constraint violated: {constraint}")]
    UniqueViolation { constraint: String },

    /// Database connection failed.
    ///
    /// ## When This Occurs
    /// - Server unreachable or credentials rejected
    /// - Pool closed during shutdown
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Connection settings could not be turned into a URL.
    #[error("Invalid database configuration: {0}")]
    InvalidConfig(String),

    /// Creating the schema at startup failed.
    #[error("Schema setup failed: {0}")]
    SchemaFailed(String),

    /// Query execution failed.
    #[error("Query failed: {0}")]
    QueryFailed(String),

    /// Beginning or committing a transaction failed.
    #[error("Transaction failed: {0}")]
    TransactionFailed(String),

    /// Pool exhausted (all connections in use until the acquire timeout).
    #[error("Connection pool exhausted")]
    PoolExhausted,

    /// Internal database error.
    #[error("Internal database error: {0}")]
    Internal(String),
}

impl DbError {
    /// True when every pooled connection stayed busy past the acquire
    /// timeout. A lost or refused connection is not included.
    pub fn is_unavailable(&self) -> bool {
        matches!(self, DbError::PoolExhausted)
    }
}

/// Convert sqlx errors to DbError.
///
/// ## Error Mapping
/// ```text
/// sqlx::Error::Database (unique)  → DbError::UniqueViolation
/// sqlx::Error::Database (other)   → DbError::QueryFailed
/// sqlx::Error::PoolTimedOut       → DbError::PoolExhausted
/// sqlx::Error::PoolClosed / Io    → DbError::ConnectionFailed
/// Other                           → DbError::Internal
/// ```
impl From<sqlx::Error> for DbError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::Database(db_err) => match db_err.kind() {
                ErrorKind::UniqueViolation => DbError::UniqueViolation {
                    constraint: db_err
                        .constraint()
                        .unwrap_or_else(|| db_err.message())
                        .to_string(),
                },
                _ => DbError::QueryFailed(db_err.message().to_string()),
            },

            sqlx::Error::PoolTimedOut => DbError::PoolExhausted,

            sqlx::Error::PoolClosed => DbError::ConnectionFailed("Pool is closed".to_string()),

            sqlx::Error::Io(e) => DbError::ConnectionFailed(e.to_string()),

            _ => DbError::Internal(err.to_string()),
        }
    }
}

/// Result type for database operations.
pub type DbResult<T> = Result<T, DbError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_pool_timeout_is_unavailable() {
        let err: DbError = sqlx::Error::PoolTimedOut.into();
        assert!(matches!(err, DbError::PoolExhausted));
        assert!(err.is_unavailable());

        let err: DbError = sqlx::Error::PoolClosed.into();
        assert!(matches!(err, DbError::ConnectionFailed(_)));
        assert!(!err.is_unavailable());

        let refused = std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "refused");
        let err: DbError = sqlx::Error::Io(refused).into();
        assert!(matches!(err, DbError::ConnectionFailed(_)));
        assert!(!err.is_unavailable());
    }

    #[test]
    fn test_row_not_found_is_internal() {
        let err: DbError = sqlx::Error::RowNotFound.into();
        assert!(matches!(err, DbError::Internal(_)));
        assert!(!err.is_unavailable());
    }
}
