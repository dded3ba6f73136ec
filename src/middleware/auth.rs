//! Authentication extraction
//!
//! Tokens are issued by the platform's identity provider; this service only
//! verifies them and resolves the caller to a stable user id. Protected
//! handlers take [`AuthenticatedUser`] as an extractor argument.

use axum::{
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts},
};
use jsonwebtoken::{DecodingKey, Validation, decode};
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use crate::{
    config::CONFIG,
    error::{AppError, AppResult},
};

/// JWT claims issued by the identity provider
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// User id
    pub sub: String,
    pub username: String,
    pub role: String,
    /// Expiry (unix seconds)
    pub exp: usize,
}

/// Verify a JWT and return its claims
pub fn verify_token(token: &str, secret: &str) -> AppResult<Claims> {
    let data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )?;
    Ok(data.claims)
}

/// Authenticated user resolved from the request's bearer token
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthenticatedUser {
    pub id: Uuid,
    pub username: String,
    pub role: String,
}

impl<S> FromRequestParts<S> for AuthenticatedUser
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|h| h.to_str().ok())
            .ok_or(AppError::Unauthorized)?;

        let token = auth_header.strip_prefix("Bearer ").ok_or_else(|| {
            debug!("Auth failed: Authorization header is not a bearer token");
            AppError::Unauthorized
        })?;

        let claims = verify_token(token, &CONFIG.jwt.secret).inspect_err(|e| {
            debug!(error = ?e, "Auth failed: token verification failed");
        })?;

        let id = Uuid::parse_str(&claims.sub).map_err(|_| {
            debug!(sub = %claims.sub, "Auth failed: invalid user id in token");
            AppError::InvalidToken
        })?;

        Ok(AuthenticatedUser {
            id,
            username: claims.username,
            role: claims.role,
        })
    }
}
