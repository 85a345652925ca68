use anyhow::Context;
use sqlx::PgPool;
use tracing::{info, instrument};

use crate::config::email::EmailConfig;
use crate::config::session::SessionConfig;
use crate::utils::email::EmailService;
use crate::utils::errors::AppError;
use crate::utils::jwt::create_invite_token;

use super::model::{InviteRequest, InviteResponse, User};

pub struct InviteService;

impl InviteService {
    /// Provision an account and deliver the invitation.
    ///
    /// The row is inserted before the email goes out; if delivery fails the
    /// account exists but unconfirmed, and re-inviting the same address
    /// reports "already exists" — operators resolve that by deleting the
    /// row or resending from the CLI.
    #[instrument(skip(db, session_config, email_config))]
    pub async fn invite_user(
        db: &PgPool,
        dto: InviteRequest,
        session_config: &SessionConfig,
        email_config: &EmailConfig,
    ) -> Result<InviteResponse, AppError> {
        let existing = sqlx::query_as::<_, User>(
            "SELECT id, email, plan, credits, lang, invited_at, confirmed_at, created_at, updated_at
             FROM users WHERE email = $1",
        )
        .bind(&dto.email)
        .fetch_optional(db)
        .await
        .context("Failed to look up user by email")
        .map_err(AppError::database)?;

        if existing.is_some() {
            return Err(AppError::bad_request(anyhow::anyhow!(
                "User already exists"
            )));
        }

        let user = sqlx::query_as::<_, User>(
            "INSERT INTO users (email, plan, credits, lang)
             VALUES ($1, 'FREE', $2, $3)
             RETURNING id, email, plan, credits, lang, invited_at, confirmed_at, created_at, updated_at",
        )
        .bind(&dto.email)
        .bind(dto.credits)
        .bind(&dto.lang)
        .fetch_one(db)
        .await
        .context("Failed to insert user")
        .map_err(AppError::database)?;

        let token = create_invite_token(user.id, &user.email, session_config)?;
        let invite_link = format!(
            "{}/auth/confirm?token={}",
            email_config.frontend_url, token
        );

        EmailService::new(email_config.clone())
            .send_invite_email(&user.email, &invite_link, &user.lang)
            .await?;

        info!(user_id = %user.id, email = %user.email, "invitation sent");

        Ok(InviteResponse {
            message: format!("Invitation sent to {}", user.email),
            user_id: user.id,
        })
    }
}
