//! JWT issue and verification.
//!
//! Tokens are HS256-signed and carry the username and admin flag.

use std::env;

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, TokenData, Validation};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{AuthError, AuthResult};

/// Default token lifetime: 24 hours.
pub const DEFAULT_TOKEN_LIFETIME_SECS: i64 = 86_400;

const DEV_SECRET_KEY: &str = "secret-dev";

/// Signing configuration.
#[derive(Debug, Clone)]
pub struct AuthConfig {
    pub secret_key: String,
    pub token_lifetime_secs: i64,
}

impl AuthConfig {
    /// Config with the given secret and the default lifetime.
    pub fn new(secret_key: impl Into<String>) -> Self {
        AuthConfig {
            secret_key: secret_key.into(),
            token_lifetime_secs: DEFAULT_TOKEN_LIFETIME_SECS,
        }
    }

    /// Reads `SECRET_KEY` and `TOKEN_LIFETIME_SECS`.
    ///
    /// A missing `SECRET_KEY` falls back to a development key.
    pub fn from_env() -> AuthResult<Self> {
        let secret_key = env::var("SECRET_KEY").unwrap_or_else(|_| {
            warn!("SECRET_KEY not set, using development key");
            DEV_SECRET_KEY.to_string()
        });

        let token_lifetime_secs = match env::var("TOKEN_LIFETIME_SECS") {
            Ok(raw) => raw
                .parse()
                .map_err(|_| AuthError::Config("TOKEN_LIFETIME_SECS".to_string()))?,
            Err(_) => DEFAULT_TOKEN_LIFETIME_SECS,
        };

        Ok(AuthConfig {
            secret_key,
            token_lifetime_secs,
        })
    }
}

/// JWT claims structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Claims {
    pub username: String,

    pub is_admin: bool,

    /// Issued at (Unix timestamp)
    pub iat: i64,

    /// Expiration (Unix timestamp)
    pub exp: i64,
}

/// The authenticated caller of one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Principal {
    pub username: String,
    pub is_admin: bool,
}

impl From<Claims> for Principal {
    fn from(claims: Claims) -> Self {
        Principal {
            username: claims.username,
            is_admin: claims.is_admin,
        }
    }
}

/// Signs and verifies tokens with one shared secret.
pub struct TokenKeys {
    encoding: EncodingKey,
    decoding: DecodingKey,
    lifetime_secs: i64,
}

impl TokenKeys {
    pub fn new(config: &AuthConfig) -> Self {
        TokenKeys {
            encoding: EncodingKey::from_secret(config.secret_key.as_bytes()),
            decoding: DecodingKey::from_secret(config.secret_key.as_bytes()),
            lifetime_secs: config.token_lifetime_secs,
        }
    }

    /// Issues a token for `username`.
    pub fn issue(&self, username: &str, is_admin: bool) -> AuthResult<String> {
        let now = Utc::now();
        let exp = now + Duration::seconds(self.lifetime_secs);

        let claims = Claims {
            username: username.to_string(),
            is_admin,
            iat: now.timestamp(),
            exp: exp.timestamp(),
        };

        encode(&Header::default(), &claims, &self.encoding)
            .map_err(|e| AuthError::Token(format!("Failed to generate token: {}", e)))
    }

    /// Validates and decodes a raw token.
    pub fn verify(&self, token: &str) -> AuthResult<Claims> {
        let token_data: TokenData<Claims> = decode(token, &self.decoding, &Validation::default())
            .map_err(|e| {
                debug!(error = %e, "Token rejected");
                AuthError::Unauthorized
            })?;

        Ok(token_data.claims)
    }

    /// Resolves an `Authorization` header value to a principal.
    ///
    /// A missing header or a token that fails verification yields `None`;
    /// the request then proceeds anonymously.
    pub fn authenticate(&self, header: Option<&str>) -> Option<Principal> {
        let token = extract_bearer_token(header?)?;
        self.verify(token).ok().map(Principal::from)
    }
}

/// Strips a `Bearer ` or `bearer ` prefix and surrounding whitespace.
pub fn extract_bearer_token(header: &str) -> Option<&str> {
    let token = header
        .strip_prefix("Bearer ")
        .or_else(|| header.strip_prefix("bearer "))?
        .trim();

    if token.is_empty() {
        None
    } else {
        Some(token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys() -> TokenKeys {
        TokenKeys::new(&AuthConfig::new("test-secret"))
    }

    #[test]
    fn test_issue_then_verify() {
        let token = keys().issue("test", false).unwrap();

        let claims = keys().verify(&token).unwrap();

        assert_eq!(claims.username, "test");
        assert!(!claims.is_admin);
        assert_eq!(claims.exp - claims.iat, DEFAULT_TOKEN_LIFETIME_SECS);
    }

    #[test]
    fn test_authenticate_valid_header() {
        let token = keys().issue("test", true).unwrap();

        let principal = keys().authenticate(Some(&format!("Bearer {token}")));

        assert_eq!(
            principal,
            Some(Principal {
                username: "test".to_string(),
                is_admin: true,
            })
        );
    }

    #[test]
    fn test_authenticate_lowercase_scheme() {
        let token = keys().issue("test", false).unwrap();

        let principal = keys().authenticate(Some(&format!("bearer   {token}  ")));

        assert_eq!(principal.map(|p| p.username), Some("test".to_string()));
    }

    #[test]
    fn test_authenticate_no_header() {
        assert_eq!(keys().authenticate(None), None);
    }

    #[test]
    fn test_authenticate_wrong_secret() {
        let other = TokenKeys::new(&AuthConfig::new("wrong"));
        let token = other.issue("test", false).unwrap();

        assert_eq!(keys().authenticate(Some(&format!("Bearer {token}"))), None);
    }

    #[test]
    fn test_authenticate_expired() {
        let expired = TokenKeys::new(&AuthConfig {
            secret_key: "test-secret".to_string(),
            token_lifetime_secs: -3_600,
        });
        let token = expired.issue("test", false).unwrap();

        assert_eq!(keys().authenticate(Some(&format!("Bearer {token}"))), None);
    }

    #[test]
    fn test_authenticate_garbage() {
        assert_eq!(keys().authenticate(Some("Bearer not.a.jwt")), None);
        assert_eq!(keys().authenticate(Some("Basic abc")), None);
    }

    #[test]
    fn test_extract_bearer_token() {
        assert_eq!(extract_bearer_token("Bearer abc"), Some("abc"));
        assert_eq!(extract_bearer_token("bearer abc "), Some("abc"));
        assert_eq!(extract_bearer_token("Bearer "), None);
        assert_eq!(extract_bearer_token("Token abc"), None);
    }
}
