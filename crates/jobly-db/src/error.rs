//! # Database Error Types
//!
//! Error types for database operations.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  CoreError (jobly-core)      SQLite Error (sqlx::Error)                │
//! │       │                            │                                    │
//! │       └──────────┬─────────────────┘                                    │
//! │                  ▼                                                      │
//! │  DbError (this module) ← Adds context and categorization               │
//! │                  │                                                      │
//! │                  ▼                                                      │
//! │  Route handler maps to 400 / 404 / 409 / 500                           │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use jobly_core::CoreError;
use thiserror::Error;

/// Database operation errors.
///
/// Every variant is raised where it is detected and propagated unchanged;
/// nothing here is retried or rolled back.
#[derive(Debug, Error)]
pub enum DbError {
    /// Bad caller input, detected before any query ran.
    #[error(transparent)]
    InvalidArgument(#[from] CoreError),

    /// No row with the requested primary key.
    ///
    /// ## When This Occurs
    /// - `get` finds no row
    /// - `update` / `remove` affect zero rows
    #[error("No {entity}: {key}")]
    NotFound { entity: String, key: String },

    /// A row with the same unique key already exists.
    ///
    /// ## When This Occurs
    /// - Creating a company whose handle is taken
    /// - Any other UNIQUE index violation (e.g. company name)
    #[error("Duplicate {entity}: {key}")]
    AlreadyExists { entity: String, key: String },

    /// Foreign key constraint violation.
    ///
    /// ## When This Occurs
    /// - Creating a job for a company handle that does not exist
    #[error("Foreign key violation: {message}")]
    ForeignKeyViolation { message: String },

    /// Database connection failed.
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Migration failed.
    #[error("Migration failed: {0}")]
    MigrationFailed(String),

    /// Query execution failed (including CHECK constraint failures).
    #[error("Query failed: {0}")]
    QueryFailed(String),

    /// Pool exhausted (all connections in use).
    #[error("Connection pool exhausted")]
    PoolExhausted,

    /// Configuration value could not be used.
    #[error("Invalid value for {0}")]
    Config(String),

    /// Internal database error.
    #[error("Internal database error: {0}")]
    Internal(String),
}

impl DbError {
    /// Creates a NotFound error for a given entity type and key.
    pub fn not_found(entity: impl Into<String>, key: impl ToString) -> Self {
        DbError::NotFound {
            entity: entity.into(),
            key: key.to_string(),
        }
    }

    /// Creates an AlreadyExists error.
    pub fn already_exists(entity: impl Into<String>, key: impl ToString) -> Self {
        DbError::AlreadyExists {
            entity: entity.into(),
            key: key.to_string(),
        }
    }
}

impl From<jobly_core::ValidationError> for DbError {
    fn from(err: jobly_core::ValidationError) -> Self {
        DbError::InvalidArgument(CoreError::Validation(err))
    }
}

/// Convert sqlx errors to DbError.
///
/// ## Error Mapping
/// ```text
/// sqlx::Error::Database       → Analyze message for constraint type
/// sqlx::Error::PoolTimedOut   → DbError::PoolExhausted
/// sqlx::Error::PoolClosed     → DbError::ConnectionFailed
/// Other                       → DbError::Internal
/// ```
impl From<sqlx::Error> for DbError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::Database(db_err) => {
                let msg = db_err.message();

                // SQLite constraint messages:
                // UNIQUE constraint: "UNIQUE constraint failed: <table>.<column>"
                // FK constraint: "FOREIGN KEY constraint failed"
                if msg.contains("UNIQUE constraint failed") {
                    let key = msg
                        .split("UNIQUE constraint failed: ")
                        .nth(1)
                        .unwrap_or("unknown")
                        .to_string();
                    DbError::AlreadyExists {
                        entity: "record".to_string(),
                        key,
                    }
                } else if msg.contains("FOREIGN KEY constraint failed") {
                    DbError::ForeignKeyViolation {
                        message: msg.to_string(),
                    }
                } else {
                    DbError::QueryFailed(msg.to_string())
                }
            }

            sqlx::Error::PoolTimedOut => DbError::PoolExhausted,

            sqlx::Error::PoolClosed => DbError::ConnectionFailed("Pool is closed".to_string()),

            _ => DbError::Internal(err.to_string()),
        }
    }
}

impl From<sqlx::migrate::MigrateError> for DbError {
    fn from(err: sqlx::migrate::MigrateError) -> Self {
        DbError::MigrationFailed(err.to_string())
    }
}

/// Result type for database operations.
pub type DbResult<T> = Result<T, DbError>;
