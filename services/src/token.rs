//! Signed, time-limited bearer tokens.
//!
//! HS256 JWTs carrying the user's ID and email. Parsing is total: any bad
//! signature, malformed token or expired claim yields `None`, which the
//! edge layer treats as unauthenticated.

use chrono::{DateTime, Duration, Utc};
use common::AppConfig;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    /// User ID of the token subject.
    pub sub: i64,
    pub email: String,
    pub iat: usize,
    pub exp: usize,
}

#[derive(Debug, Error)]
pub enum TokenError {
    #[error("token signing failed: {0}")]
    Signing(#[from] jsonwebtoken::errors::Error),
}

/// Issues and validates bearer tokens with a process-wide secret.
#[derive(Clone)]
pub struct TokenService {
    secret: String,
    ttl_minutes: i64,
}

impl TokenService {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            secret: config.jwt_secret.clone(),
            ttl_minutes: config.jwt_duration_minutes,
        }
    }

    /// Issues a token with the configured default TTL.
    pub fn issue(&self, user_id: i64, email: &str) -> Result<(String, DateTime<Utc>), TokenError> {
        self.issue_with_ttl(user_id, email, self.ttl_minutes)
    }

    pub fn issue_with_ttl(
        &self,
        user_id: i64,
        email: &str,
        ttl_minutes: i64,
    ) -> Result<(String, DateTime<Utc>), TokenError> {
        let now = Utc::now();
        let expires_at = now + Duration::minutes(ttl_minutes);
        let claims = Claims {
            sub: user_id,
            email: email.to_string(),
            iat: now.timestamp() as usize,
            exp: expires_at.timestamp() as usize,
        };
        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.secret.as_bytes()),
        )?;
        Ok((token, expires_at))
    }

    /// Returns the claims if the token is well-formed, correctly signed
    /// and unexpired, otherwise `None`. Never panics or errors.
    pub fn parse(&self, token: &str) -> Option<Claims> {
        decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.secret.as_bytes()),
            &Validation::new(Algorithm::HS256),
        )
        .ok()
        .map(|data| data.claims)
    }
}
