//! Bearer-token issuing and verification.
//!
//! Tokens are HS256 JWTs signed with the configured secret. The only claim
//! the rest of the service cares about is `sub`, the user ID; `iat` and
//! `exp` bound the token's lifetime.

use chrono::Utc;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation};
use secrecy::ExposeSecret;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use seagrape_core::UserId;

use crate::config::ApiConfig;

/// Claims carried by an issued token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// User ID the token was issued for.
    pub sub: i32,
    /// Issued-at, seconds since the Unix epoch.
    pub iat: i64,
    /// Expiry, seconds since the Unix epoch.
    pub exp: i64,
}

impl Claims {
    /// The user identity this token proves.
    #[must_use]
    pub const fn user_id(&self) -> UserId {
        UserId::new(self.sub)
    }
}

/// Errors from token operations.
#[derive(Debug, Error)]
pub enum TokenError {
    /// Signing failed. Should not happen with a well-formed secret.
    #[error("token encoding failed: {0}")]
    Encode(#[source] jsonwebtoken::errors::Error),

    /// The token is malformed, has a bad signature, or is expired.
    ///
    /// Deliberately a single variant: callers must not be able to tell a
    /// forged token from an expired one.
    #[error("invalid or expired token")]
    Invalid,
}

/// Issues and verifies bearer tokens.
///
/// Constructed once at startup from [`ApiConfig`] and shared through the
/// application state.
pub struct TokenService {
    encoding: EncodingKey,
    decoding: DecodingKey,
    validation: Validation,
    ttl_secs: i64,
}

impl TokenService {
    /// Build a token service from the configured signing secret and TTL.
    #[must_use]
    pub fn new(config: &ApiConfig) -> Self {
        let secret = config.token_secret.expose_secret().as_bytes();

        Self {
            encoding: EncodingKey::from_secret(secret),
            decoding: DecodingKey::from_secret(secret),
            validation: Validation::new(Algorithm::HS256),
            ttl_secs: i64::try_from(config.token_ttl_secs).unwrap_or(i64::MAX),
        }
    }

    /// Issue a signed token for a user.
    ///
    /// # Errors
    ///
    /// Returns `TokenError::Encode` if signing fails.
    pub fn issue(&self, user_id: UserId) -> Result<String, TokenError> {
        let now = Utc::now().timestamp();
        let claims = Claims {
            sub: user_id.as_i32(),
            iat: now,
            exp: now + self.ttl_secs,
        };

        jsonwebtoken::encode(&Header::new(Algorithm::HS256), &claims, &self.encoding)
            .map_err(TokenError::Encode)
    }

    /// Verify a token and return its claims.
    ///
    /// # Errors
    ///
    /// Returns `TokenError::Invalid` for any malformed, forged, or expired
    /// token.
    pub fn verify(&self, token: &str) -> Result<Claims, TokenError> {
        jsonwebtoken::decode::<Claims>(token, &self.decoding, &self.validation)
            .map(|data| data.claims)
            .map_err(|_| TokenError::Invalid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::SecretString;

    fn test_config(secret: &str) -> ApiConfig {
        ApiConfig {
            database_url: SecretString::from("postgres://localhost/test"),
            host: "127.0.0.1".parse().expect("valid addr"),
            port: 5000,
            token_secret: SecretString::from(secret.to_owned()),
            token_ttl_secs: 3600,
            sentry_dsn: None,
        }
    }

    const SECRET: &str = "kF8#mQ2$vL9@xR4!wZ7&nJ3*pT6^bD1%";

    #[test]
    fn issued_token_verifies_to_same_identity() {
        let service = TokenService::new(&test_config(SECRET));
        let token = service.issue(UserId::new(42)).expect("issue");
        let claims = service.verify(&token).expect("verify");

        assert_eq!(claims.user_id(), UserId::new(42));
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn garbage_token_is_rejected() {
        let service = TokenService::new(&test_config(SECRET));

        assert!(matches!(
            service.verify("not-a-token"),
            Err(TokenError::Invalid)
        ));
        assert!(matches!(service.verify(""), Err(TokenError::Invalid)));
    }

    #[test]
    fn token_signed_with_other_secret_is_rejected() {
        let issuer = TokenService::new(&test_config("qW5$eR8@tY2!uI6#oP9&aS3*dF7^gH1%"));
        let verifier = TokenService::new(&test_config(SECRET));

        let token = issuer.issue(UserId::new(1)).expect("issue");
        assert!(matches!(verifier.verify(&token), Err(TokenError::Invalid)));
    }

    #[test]
    fn expired_token_is_rejected() {
        let service = TokenService::new(&test_config(SECRET));

        // Hand-craft claims whose expiry is well past the default leeway.
        let now = Utc::now().timestamp();
        let claims = Claims {
            sub: 7,
            iat: now - 7200,
            exp: now - 3600,
        };
        let token = jsonwebtoken::encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(SECRET.as_bytes()),
        )
        .expect("encode");

        assert!(matches!(service.verify(&token), Err(TokenError::Invalid)));
    }

    #[test]
    fn tampered_token_is_rejected() {
        let service = TokenService::new(&test_config(SECRET));
        let token = service.issue(UserId::new(42)).expect("issue");

        let mut tampered = token;
        tampered.pop();
        assert!(matches!(service.verify(&tampered), Err(TokenError::Invalid)));
    }
}
