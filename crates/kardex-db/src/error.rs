//! # Storage Error Types
//!
//! Errors raised by the storage layer.
//!
//! ## Error Flow
//! ```text
//! SQLite error (sqlx::Error)
//!      │
//!      ▼
//! StoreError (this module) — adds context and categorization
//!      │
//!      ▼
//! CatalogError::Store (kardex-catalog) — surfaced to callers unchanged
//! ```
//!
//! Domain outcomes (row missing, duplicate id) are NOT storage errors
//! here: by-key lookups return `Option` and the service layer decides
//! what absence means. The one exception is [`StoreError::UniqueViolation`],
//! the PRIMARY KEY backstop for writes that race past the service-layer
//! existence check.

use thiserror::Error;

/// Storage operation errors.
///
/// These wrap sqlx errors and are never retried automatically; the caller
/// propagates them as-is.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The database could not be opened or the connection dropped.
    #[error("connection failed: {0}")]
    ConnectionFailed(String),

    /// A schema migration failed to apply.
    #[error("migration failed: {0}")]
    MigrationFailed(String),

    /// A PRIMARY KEY / UNIQUE constraint rejected a write.
    #[error("duplicate key: {constraint}")]
    UniqueViolation { constraint: String },

    /// A statement failed to execute.
    #[error("query failed: {0}")]
    QueryFailed(String),

    /// All pooled connections are in use.
    #[error("connection pool exhausted")]
    PoolExhausted,

    /// Anything sqlx reports that does not fit the categories above.
    #[error("internal storage error: {0}")]
    Internal(String),
}

/// Convert sqlx errors to StoreError.
///
/// ## Error Mapping
/// ```text
/// sqlx::Error::Database (UNIQUE…)  → StoreError::UniqueViolation
/// sqlx::Error::Database (other)    → StoreError::QueryFailed
/// sqlx::Error::PoolTimedOut        → StoreError::PoolExhausted
/// sqlx::Error::PoolClosed          → StoreError::ConnectionFailed
/// Other                            → StoreError::Internal
/// ```
impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::Database(db_err) => {
                let msg = db_err.message();

                // SQLite reports "UNIQUE constraint failed: <table>.<column>"
                if let Some(constraint) = msg.strip_prefix("UNIQUE constraint failed: ") {
                    StoreError::UniqueViolation {
                        constraint: constraint.to_string(),
                    }
                } else {
                    StoreError::QueryFailed(msg.to_string())
                }
            }

            sqlx::Error::PoolTimedOut => StoreError::PoolExhausted,

            sqlx::Error::PoolClosed => {
                StoreError::ConnectionFailed("pool is closed".to_string())
            }

            _ => StoreError::Internal(err.to_string()),
        }
    }
}

impl From<sqlx::migrate::MigrateError> for StoreError {
    fn from(err: sqlx::migrate::MigrateError) -> Self {
        StoreError::MigrationFailed(err.to_string())
    }
}

/// Result type for storage operations.
pub type StoreResult<T> = Result<T, StoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
