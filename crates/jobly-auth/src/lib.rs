//! # jobly-auth: Request Principal and Route Guards
//!
//! Route handlers call [`TokenKeys::authenticate`] with the request's
//! `Authorization` header to get an optional [`Principal`], then run one of
//! the guards before invoking a mutating repository operation.
//!
//! A missing or invalid token is not an error: the request is simply
//! anonymous. Only the guards fail, with [`AuthError::Unauthorized`].
//!
//! ## Usage
//!
//! ```rust
//! use jobly_auth::{ensure_admin, AuthConfig, TokenKeys};
//!
//! let keys = TokenKeys::new(&AuthConfig::new("secret"));
//! let token = keys.issue("admin", true).unwrap();
//!
//! let principal = keys.authenticate(Some(&format!("Bearer {token}")));
//! assert!(ensure_admin(principal.as_ref()).is_ok());
//!
//! let anonymous = keys.authenticate(None);
//! assert!(ensure_admin(anonymous.as_ref()).is_err());
//! ```

pub mod error;
pub mod guard;
pub mod token;

pub use error::{AuthError, AuthResult};
pub use guard::{ensure_admin, ensure_correct_user_or_admin, ensure_logged_in};
pub use token::{AuthConfig, Claims, Principal, TokenKeys};
