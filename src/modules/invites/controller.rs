use axum::Json;
use axum::extract::State;
use tracing::instrument;

use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::validator::ValidatedJson;

use super::model::{InviteRequest, InviteResponse};
use super::service::InviteService;

/// Invite a new user by email
#[utoipa::path(
    post,
    path = "/api/invite",
    request_body = InviteRequest,
    responses(
        (status = 200, description = "Invitation sent", body = InviteResponse),
        (status = 400, description = "Bad request - missing email or user already exists", body = crate::docs::ErrorResponse),
        (status = 422, description = "Validation error", body = crate::docs::ErrorResponse),
        (status = 500, description = "Internal server error", body = crate::docs::ErrorResponse)
    ),
    tag = "Invites"
)]
#[instrument(skip(state))]
pub async fn invite_user(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<InviteRequest>,
) -> Result<Json<InviteResponse>, AppError> {
    let response = InviteService::invite_user(
        &state.db,
        dto,
        &state.session_config,
        &state.email_config,
    )
    .await?;
    Ok(Json(response))
}
