use chrono::{Duration, Utc};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{AppError, Res};

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    User,
    Admin,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct JwtClaims {
    pub user_id: Uuid,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub role: Role,
    pub exp: usize,
}

impl JwtClaims {
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}

pub struct ClaimsSpec {
    pub user_id: Uuid,
    pub email: Option<String>,
    pub role: Role,
}

/// Generates JWT token based on claims spec, secret and lifetime in hours
pub fn generate_jwt(spec: ClaimsSpec, secret: &str, expiration_hours: i64) -> Res<String> {
    let expiration = Utc::now()
        .checked_add_signed(Duration::hours(expiration_hours))
        .ok_or_else(|| AppError::Internal("Token expiration overflow".to_string()))?
        .timestamp();

    let claims = JwtClaims {
        user_id: spec.user_id,
        email: spec.email,
        role: spec.role,
        exp: expiration as usize,
    };

    jsonwebtoken::encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(AppError::from)
}

/// Extracts claims object from JWT token.
/// Requires JWT secret.
pub fn validate_jwt(token: &str, secret: &str) -> Res<JwtClaims> {
    let token_data = jsonwebtoken::decode::<JwtClaims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )?;
    Ok(token_data.claims)
}

/// Fails unless the request carried valid claims.
pub fn require_user(claims: Option<&JwtClaims>) -> Res<&JwtClaims> {
    claims.ok_or_else(|| AppError::Unauthorized("User not authenticated".to_string()))
}

/// Fails unless the caller is an authenticated admin.
/// `action` completes the sentence "Only admins can ...".
pub fn require_admin<'a>(claims: Option<&'a JwtClaims>, action: &str) -> Res<&'a JwtClaims> {
    let claims = require_user(claims)?;
    if !claims.is_admin() {
        log::warn!("User {} tried to {} without admin role", claims.user_id, action);
        return Err(AppError::Forbidden(format!("Only admins can {}", action)));
    }
    Ok(claims)
}
