use chrono::{Duration, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use thiserror::Error;

use crate::{AuthConfig, Claims, Role};

#[derive(Debug, Error)]
pub enum TokenError {
    /// Signing failed (should not happen with a valid key).
    #[error("failed to sign token")]
    Sign(#[source] jsonwebtoken::errors::Error),

    /// Malformed, wrongly signed, or expired token.
    #[error("token is invalid")]
    Invalid(#[source] jsonwebtoken::errors::Error),
}

/// Issues and verifies HS256 identity assertions.
///
/// Pure over configuration + input: no IO, no per-request state. Embedded
/// claims are returned as-is on successful verification.
pub struct TokenService {
    encoding: EncodingKey,
    decoding: DecodingKey,
    ttl: Duration,
}

impl TokenService {
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            encoding: EncodingKey::from_secret(config.secret()),
            decoding: DecodingKey::from_secret(config.secret()),
            ttl: config.token_ttl(),
        }
    }

    /// Sign `{sub, email, role}` claims valid from now.
    pub fn issue(&self, id: u64, email: &str, role: Role) -> Result<String, TokenError> {
        let claims = Claims::new(id, email, role, Utc::now(), self.ttl);
        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding).map_err(TokenError::Sign)
    }

    /// Verify signature and expiry, returning the embedded claims unchanged.
    pub fn verify(&self, token: &str) -> Result<Claims, TokenError> {
        let data = decode::<Claims>(token, &self.decoding, &Validation::new(Algorithm::HS256))
            .map_err(TokenError::Invalid)?;
        Ok(data.claims)
    }
}
