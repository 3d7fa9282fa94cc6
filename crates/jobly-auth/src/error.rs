//! Error types for jobly-auth.

use thiserror::Error;

/// Authentication and authorization errors.
#[derive(Debug, Error, PartialEq)]
pub enum AuthError {
    /// Absent, invalid, or insufficient principal.
    #[error("Unauthorized")]
    Unauthorized,

    /// A token could not be signed.
    #[error("Token error: {0}")]
    Token(String),

    /// Configuration value could not be used.
    #[error("Invalid value for {0}")]
    Config(String),
}

/// Result type for auth operations.
pub type AuthResult<T> = Result<T, AuthError>;
