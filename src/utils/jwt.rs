use anyhow::anyhow;
use chrono::Utc;
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::config::session::SessionConfig;
use crate::utils::errors::AppError;

/// Purpose tag for tokens that carry a live session.
pub const PURPOSE_SESSION: &str = "session";
/// Purpose tag for tokens embedded in invitation emails.
pub const PURPOSE_INVITE: &str = "invite";

/// Claims shared by session and invite tokens.
///
/// The `purpose` field prevents confusion between the two kinds: an invite
/// token must never be accepted as a session and vice versa.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenClaims {
    pub sub: String, // user_id
    pub email: String,
    pub purpose: String,
    pub exp: usize,
    pub iat: usize,
}

pub fn create_session_token(
    user_id: Uuid,
    email: &str,
    config: &SessionConfig,
) -> Result<String, AppError> {
    create_token(user_id, email, PURPOSE_SESSION, config.session_expiry, config)
}

pub fn create_invite_token(
    user_id: Uuid,
    email: &str,
    config: &SessionConfig,
) -> Result<String, AppError> {
    create_token(user_id, email, PURPOSE_INVITE, config.invite_expiry, config)
}

fn create_token(
    user_id: Uuid,
    email: &str,
    purpose: &str,
    expiry_seconds: i64,
    config: &SessionConfig,
) -> Result<String, AppError> {
    let now = Utc::now().timestamp();
    let exp = (now + expiry_seconds) as usize;

    let claims = TokenClaims {
        sub: user_id.to_string(),
        email: email.to_string(),
        purpose: purpose.to_string(),
        exp,
        iat: now as usize,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(config.secret.as_bytes()),
    )
    .map_err(|e| AppError::internal(anyhow!("Failed to create token: {}", e)))
}

pub fn verify_session_token(token: &str, config: &SessionConfig) -> Result<TokenClaims, AppError> {
    verify_token(token, PURPOSE_SESSION, config)
}

pub fn verify_invite_token(token: &str, config: &SessionConfig) -> Result<TokenClaims, AppError> {
    verify_token(token, PURPOSE_INVITE, config)
}

fn verify_token(
    token: &str,
    expected_purpose: &str,
    config: &SessionConfig,
) -> Result<TokenClaims, AppError> {
    let claims = decode::<TokenClaims>(
        token,
        &DecodingKey::from_secret(config.secret.as_bytes()),
        &Validation::default(),
    )
    .map(|data| data.claims)
    .map_err(|_| AppError::unauthorized(anyhow!("Invalid or expired token")))?;

    if claims.purpose != expected_purpose {
        return Err(AppError::unauthorized(anyhow!(
            "Token purpose mismatch: expected {}",
            expected_purpose
        )));
    }

    Ok(claims)
}
