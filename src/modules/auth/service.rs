use anyhow::Context;
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use crate::config::session::SessionConfig;
use crate::modules::invites::model::User;
use crate::utils::errors::AppError;
use crate::utils::jwt::{create_session_token, verify_invite_token};

pub struct AuthService;

impl AuthService {
    /// Exchange an invite token for a session.
    ///
    /// Stamps `confirmed_at` on first use. The invite token stays valid
    /// until it expires, so a user can re-follow the email link to sign in
    /// again from another device.
    #[instrument(skip(db, token, config))]
    pub async fn establish_session(
        db: &PgPool,
        token: &str,
        config: &SessionConfig,
    ) -> Result<(User, String), AppError> {
        let claims = verify_invite_token(token, config)?;

        let user_id = Uuid::parse_str(&claims.sub)
            .map_err(|_| AppError::unauthorized(anyhow::anyhow!("Invalid user id in token")))?;

        let user = sqlx::query_as::<_, User>(
            "SELECT id, email, plan, credits, lang, invited_at, confirmed_at, created_at, updated_at
             FROM users WHERE id = $1",
        )
        .bind(user_id)
        .fetch_optional(db)
        .await
        .context("Failed to load invited user")
        .map_err(AppError::database)?
        .ok_or_else(|| AppError::unauthorized(anyhow::anyhow!("Unknown user")))?;

        let user = if user.confirmed_at.is_none() {
            sqlx::query_as::<_, User>(
                "UPDATE users SET confirmed_at = now(), updated_at = now() WHERE id = $1
                 RETURNING id, email, plan, credits, lang, invited_at, confirmed_at, created_at, updated_at",
            )
            .bind(user.id)
            .fetch_one(db)
            .await
            .context("Failed to confirm user")
            .map_err(AppError::database)?
        } else {
            user
        };

        let session_token = create_session_token(user.id, &user.email, config)?;

        Ok((user, session_token))
    }
}
