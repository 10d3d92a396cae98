/**
 * Session Token Service
 *
 * This module issues and verifies signed, time-limited session tokens.
 * Tokens are stateless: they embed the user id and an expiry, are verified
 * by signature and expiry only, and are never persisted server-side.
 */

use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use std::time::{Duration, SystemTime, UNIX_EPOCH};
use thiserror::Error;
use uuid::Uuid;

/// Token lifetime: one hour from issuance
pub const TOKEN_TTL: Duration = Duration::from_secs(60 * 60);

/// Name of the HTTP-only cookie carrying the session token
pub const SESSION_COOKIE: &str = "token";

/// JWT claims structure
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// User ID
    pub sub: String,
    /// Expiration time (Unix timestamp)
    pub exp: u64,
    /// Issued at time (Unix timestamp)
    pub iat: u64,
}

/// Token verification failure
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TokenError {
    /// Signature mismatch, malformed token or unparsable user id
    #[error("Invalid token")]
    Invalid,
    /// Token is past its fixed expiry
    #[error("Token expired")]
    Expired,
}

/// Issues and verifies session tokens with a process-wide secret key
///
/// The secret is injected at startup through
/// [`crate::server::config::ServerConfig`]; there is no ambient global
/// state, which keeps the service trivially fakeable in tests.
pub struct TokenService {
    encoding: EncodingKey,
    decoding: DecodingKey,
}

impl TokenService {
    /// Create a token service from the configured secret
    pub fn new(secret: &str) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret.as_ref()),
            decoding: DecodingKey::from_secret(secret.as_ref()),
        }
    }

    /// Issue a signed token embedding `user_id`, expiring in one hour
    pub fn issue(&self, user_id: Uuid) -> Result<String, jsonwebtoken::errors::Error> {
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs();

        let claims = Claims {
            sub: user_id.to_string(),
            exp: now + TOKEN_TTL.as_secs(),
            iat: now,
        };

        encode(&Header::default(), &claims, &self.encoding)
    }

    /// Verify a token and return the embedded user id
    ///
    /// Pure function, no side effects. Fails with [`TokenError::Expired`]
    /// when past expiry and [`TokenError::Invalid`] for everything else
    /// (bad signature, malformed token, unparsable user id).
    pub fn verify(&self, token: &str) -> Result<Uuid, TokenError> {
        let mut validation = Validation::default();
        validation.leeway = 0;

        let data = decode::<Claims>(token, &self.decoding, &validation).map_err(|e| {
            match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => TokenError::Expired,
                _ => TokenError::Invalid,
            }
        })?;

        Uuid::parse_str(&data.claims.sub).map_err(|_| TokenError::Invalid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> TokenService {
        TokenService::new("test-secret")
    }

    #[test]
    fn test_issue_token() {
        let user_id = Uuid::new_v4();
        let token = service().issue(user_id).unwrap();
        assert!(!token.is_empty());
    }

    #[test]
    fn test_verify_round_trip() {
        let tokens = service();
        let user_id = Uuid::new_v4();
        let token = tokens.issue(user_id).unwrap();

        assert_eq!(tokens.verify(&token), Ok(user_id));
    }

    #[test]
    fn test_verify_garbage_token() {
        assert_eq!(
            service().verify("invalid.token.here"),
            Err(TokenError::Invalid)
        );
    }

    #[test]
    fn test_verify_wrong_secret() {
        let user_id = Uuid::new_v4();
        let token = TokenService::new("other-secret").issue(user_id).unwrap();

        assert_eq!(service().verify(&token), Err(TokenError::Invalid));
    }

    #[test]
    fn test_verify_expired_token() {
        let tokens = service();
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_secs();

        // Forge a token that expired an hour ago with the same secret.
        let claims = Claims {
            sub: Uuid::new_v4().to_string(),
            exp: now - 3600,
            iat: now - 7200,
        };
        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret("test-secret".as_ref()),
        )
        .unwrap();

        assert_eq!(tokens.verify(&token), Err(TokenError::Expired));
    }

    #[test]
    fn test_tampered_user_id_is_invalid() {
        let tokens = service();
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_secs();

        let claims = Claims {
            sub: "not-a-uuid".to_string(),
            exp: now + 3600,
            iat: now,
        };
        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret("test-secret".as_ref()),
        )
        .unwrap();

        assert_eq!(tokens.verify(&token), Err(TokenError::Invalid));
    }
}
