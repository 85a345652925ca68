//! CLI commands, dispatched from `main` before the server starts.

use sqlx::PgPool;

use crate::config::email::EmailConfig;
use crate::config::session::SessionConfig;
use crate::modules::invites::model::{InviteRequest, InviteResponse};
use crate::modules::invites::service::InviteService;
use crate::utils::errors::AppError;

/// Provision an account and send the invitation, bypassing HTTP.
///
/// Used to bootstrap the first accounts of a deployment, since the invite
/// endpoint itself sits behind a session.
pub async fn create_invite(
    db: &PgPool,
    session_config: &SessionConfig,
    email_config: &EmailConfig,
    email: &str,
    credits: i32,
    lang: &str,
) -> Result<InviteResponse, AppError> {
    InviteService::invite_user(
        db,
        InviteRequest {
            email: email.to_string(),
            credits,
            lang: lang.to_string(),
        },
        session_config,
        email_config,
    )
    .await
}
