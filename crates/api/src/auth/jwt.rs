//! Session token issuing and verification.
//!
//! Tokens are HS256-signed JWTs carrying a [`Claims`] payload with a fixed
//! 24-hour lifetime. The server keeps no session state: the subject id is
//! re-resolved against the credential store on every request.

use chrono::Utc;
use eventhub_core::roles::Role;
use eventhub_core::types::EntityId;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

/// Claims embedded in every session token.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Claims {
    /// Subject -- the user's id.
    pub sub: EntityId,
    pub email: String,
    pub role: Role,
    /// Issued-at time (UTC Unix timestamp).
    pub iat: i64,
    /// Expiration time (UTC Unix timestamp).
    pub exp: i64,
}

/// Why a token was rejected.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum TokenError {
    /// Bad signature, malformed token, or malformed claims.
    #[error("invalid token")]
    Invalid,

    #[error("token expired")]
    Expired,
}

/// Token lifetime in hours.
pub const TOKEN_EXPIRY_HOURS: i64 = 24;

/// Fallback signing secret for local development.
const DEFAULT_SECRET: &str = "default-dev-secret-change-in-production";

#[derive(Debug, Clone)]
pub struct JwtConfig {
    /// HMAC-SHA256 secret used to sign and verify tokens.
    pub secret: String,
    pub expiry_hours: i64,
}

impl JwtConfig {
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            expiry_hours: TOKEN_EXPIRY_HOURS,
        }
    }

    /// Load from `JWT_SECRET`, falling back to a development secret.
    pub fn from_env() -> Self {
        let secret = std::env::var("JWT_SECRET")
            .ok()
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| {
                tracing::warn!("JWT_SECRET not set, using the development default");
                DEFAULT_SECRET.to_string()
            });
        Self::new(secret)
    }
}

/// Issue a signed token for the given subject.
pub fn issue_token(
    user_id: &str,
    email: &str,
    role: Role,
    config: &JwtConfig,
) -> Result<String, jsonwebtoken::errors::Error> {
    let now = Utc::now().timestamp();
    let claims = Claims {
        sub: user_id.to_string(),
        email: email.to_string(),
        role,
        iat: now,
        exp: now + config.expiry_hours * 3600,
    };
    encode_claims(&claims, config)
}

/// Sign an arbitrary claims payload.
pub fn encode_claims(
    claims: &Claims,
    config: &JwtConfig,
) -> Result<String, jsonwebtoken::errors::Error> {
    encode(
        &Header::new(Algorithm::HS256),
        claims,
        &EncodingKey::from_secret(config.secret.as_bytes()),
    )
}

/// Verify a token's signature and expiry and return its claims.
///
/// A token is expired once the current time reaches `exp`; no leeway applies.
pub fn verify_token(token: &str, config: &JwtConfig) -> Result<Claims, TokenError> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.leeway = 0;

    let claims = decode::<Claims>(
        token,
        &DecodingKey::from_secret(config.secret.as_bytes()),
        &validation,
    )
    .map_err(|e| match e.kind() {
        ErrorKind::ExpiredSignature => TokenError::Expired,
        _ => TokenError::Invalid,
    })?
    .claims;

    if claims.exp <= Utc::now().timestamp() {
        return Err(TokenError::Expired);
    }
    Ok(claims)
}
