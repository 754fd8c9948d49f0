//! Caller identity from bearer tokens.
//!
//! Tokens are HS256 JWTs minted by the identity provider that shares
//! `JWT_SECRET` with this service (or by the `issue_token` tool during
//! development). The service never handles passwords or sessions.

use axum::{
    extract::FromRequestParts,
    http::{HeaderMap, header, request::Parts},
};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::user::entity::User;
use crate::presentation::http::{errors::AppError, state::AppState};

/// Width of `users.username`.
const MAX_USERNAME_CHARS: usize = 150;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserClaims {
    pub sub: String,
    pub username: String,
    pub exp: usize,
}

impl UserClaims {
    fn into_user(self) -> Option<User> {
        let pk = Uuid::parse_str(&self.sub).ok()?;
        let username = self.username.trim().to_string();
        if username.is_empty() || username.chars().count() > MAX_USERNAME_CHARS {
            return None;
        }
        Some(User { pk, username })
    }
}

pub fn extract_bearer_token(headers: &HeaderMap) -> Option<String> {
    headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|s| s.strip_prefix("Bearer "))
        .map(|s| s.to_string())
}

pub fn decode_optional_user_claims(headers: &HeaderMap, secret: &str) -> Option<UserClaims> {
    let token = extract_bearer_token(headers)?;
    decode::<UserClaims>(
        &token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )
    .ok()
    .map(|d| d.claims)
}

pub fn decode_required_user_claims(
    headers: &HeaderMap,
    secret: &str,
) -> Result<UserClaims, AppError> {
    decode_optional_user_claims(headers, secret).ok_or_else(not_authenticated)
}

/// Sign a token for `user` that expires after `ttl`.
pub fn issue_user_token(
    secret: &str,
    user: &User,
    ttl: chrono::Duration,
) -> Result<String, jsonwebtoken::errors::Error> {
    let exp = (chrono::Utc::now() + ttl).timestamp() as usize;
    let claims = UserClaims {
        sub: user.pk.to_string(),
        username: user.username.clone(),
        exp,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
}

fn not_authenticated() -> AppError {
    AppError::Forbidden("Authentication credentials were not provided".to_string())
}

/// The authenticated caller. Rejects anonymous requests with 403.
#[derive(Debug, Clone)]
pub struct CurrentUser(pub User);

impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        decode_required_user_claims(&parts.headers, &state.config.jwt_secret)?
            .into_user()
            .map(CurrentUser)
            .ok_or_else(not_authenticated)
    }
}
