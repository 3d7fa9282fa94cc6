//! Route guards.
//!
//! Each guard takes the request's optional principal and either hands it
//! back or fails with [`AuthError::Unauthorized`].

use tracing::debug;

use crate::error::{AuthError, AuthResult};
use crate::token::Principal;

/// Requires any authenticated principal.
pub fn ensure_logged_in(principal: Option<&Principal>) -> AuthResult<&Principal> {
    principal.ok_or_else(|| {
        debug!("Rejected anonymous request");
        AuthError::Unauthorized
    })
}

/// Requires an admin principal.
pub fn ensure_admin(principal: Option<&Principal>) -> AuthResult<&Principal> {
    match principal {
        Some(p) if p.is_admin => Ok(p),
        _ => {
            debug!(user = ?principal.map(|p| &p.username), "Rejected non-admin request");
            Err(AuthError::Unauthorized)
        }
    }
}

/// Requires an admin, or the user named in the route.
pub fn ensure_correct_user_or_admin<'a>(
    principal: Option<&'a Principal>,
    username: &str,
) -> AuthResult<&'a Principal> {
    match principal {
        Some(p) if p.is_admin || p.username == username => Ok(p),
        _ => {
            debug!(
                user = ?principal.map(|p| &p.username),
                target = %username,
                "Rejected request for another user"
            );
            Err(AuthError::Unauthorized)
        }
    }
}
