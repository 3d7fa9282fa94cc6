//! # Error Types
//!
//! Domain-specific error types for jobly-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  jobly-core errors (this file)                                         │
//! │  ├── CoreError        - Builder and payload failures                   │
//! │  └── ValidationError  - Field-level validation failures                │
//! │                                                                         │
//! │  jobly-db errors (separate crate)                                      │
//! │  └── DbError          - NotFound, AlreadyExists, storage failures      │
//! │                                                                         │
//! │  jobly-auth errors (separate crate)                                    │
//! │  └── AuthError        - Unauthorized                                   │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → DbError → HTTP status             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Errors raised while turning caller input into SQL fragments.
///
/// Raised synchronously, before any query is issued, and never retried.
#[derive(Debug, Error, PartialEq)]
pub enum CoreError {
    /// Malformed or contradictory input to a builder.
    ///
    /// ## When This Occurs
    /// - Partial update with no fields
    /// - `minEmployees` greater than `maxEmployees`
    #[error("{0}")]
    InvalidArgument(String),

    /// A payload field failed validation.
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

impl CoreError {
    /// Creates an InvalidArgument error.
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        CoreError::InvalidArgument(message.into())
    }
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These mirror the request-schema checks the HTTP layer performs, so the
/// repositories never hand the storage engine a value it would reject.
#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: String, max: String },

    /// Invalid format (e.g., uppercase handle).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
