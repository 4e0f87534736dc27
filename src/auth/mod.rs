pub mod password;

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::config::SecurityConfig;
use crate::database::models::User;

/// The two privilege levels a user can hold
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    /// Full access, including writing mages
    Overseer,
    /// Read-only access
    Minion,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Overseer => "Overseer",
            Role::Minion => "Minion",
        }
    }
}

impl std::str::FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Overseer" => Ok(Role::Overseer),
            "Minion" => Ok(Role::Minion),
            other => Err(format!("unknown role: {}", other)),
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// User id
    pub sub: String,
    pub jti: String,
    pub name: String,
    /// Role name as stored on the user; parsed when the token is used
    pub role: String,
    pub profile_picture: Option<String>,
    pub iss: String,
    pub aud: String,
    pub nbf: i64,
    pub exp: i64,
    pub iat: i64,
}

impl Claims {
    pub fn new(user: &User, security: &SecurityConfig) -> Self {
        let now = Utc::now();
        let exp = (now + Duration::days(security.jwt_expiry_days)).timestamp();

        Self {
            sub: user.id.to_string(),
            jti: Uuid::new_v4().to_string(),
            name: user.name.clone(),
            role: user.role.clone(),
            profile_picture: user.profile_picture.clone(),
            iss: security.jwt_issuer.clone(),
            aud: security.jwt_audience.clone(),
            nbf: now.timestamp(),
            exp,
            iat: now.timestamp(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum JwtError {
    #[error("JWT generation error: {0}")]
    TokenGeneration(String),

    #[error("Invalid JWT token: {0}")]
    InvalidToken(String),

    #[error("JWT signing key not configured")]
    InvalidSecret,
}

const ALGORITHM: Algorithm = Algorithm::HS512;

pub fn generate_jwt(user: &User, security: &SecurityConfig) -> Result<String, JwtError> {
    if security.jwt_signing_key.is_empty() {
        return Err(JwtError::InvalidSecret);
    }

    let claims = Claims::new(user, security);
    let encoding_key = EncodingKey::from_secret(security.jwt_signing_key.as_bytes());

    encode(&Header::new(ALGORITHM), &claims, &encoding_key)
        .map_err(|e| JwtError::TokenGeneration(e.to_string()))
}

/// Verify signature, issuer, audience and lifetime, returning the claims
pub fn validate_jwt(token: &str, security: &SecurityConfig) -> Result<Claims, JwtError> {
    if security.jwt_signing_key.is_empty() {
        return Err(JwtError::InvalidSecret);
    }

    let decoding_key = DecodingKey::from_secret(security.jwt_signing_key.as_bytes());
    let mut validation = Validation::new(ALGORITHM);
    validation.set_issuer(&[&security.jwt_issuer]);
    validation.set_audience(&[&security.jwt_audience]);
    validation.validate_nbf = true;

    let token_data = decode::<Claims>(token, &decoding_key, &validation)
        .map_err(|e| JwtError::InvalidToken(e.to_string()))?;

    Ok(token_data.claims)
}
