use axum::Json;
use axum::extract::State;
use tracing::instrument;

use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::validator::ValidatedJson;

use super::model::{TutorRequest, TutorResponse};
use super::service::TutorService;

/// Enrich a learner's sentence in the target language
#[utoipa::path(
    post,
    path = "/api/tutor",
    request_body = TutorRequest,
    responses(
        (status = 200, description = "Enriched sentence", body = TutorResponse),
        (status = 400, description = "Bad request - malformed body", body = crate::docs::ErrorResponse),
        (status = 422, description = "Validation error", body = crate::docs::ErrorResponse),
        (status = 500, description = "LLM provider error", body = crate::docs::ErrorResponse)
    ),
    tag = "Tutor"
)]
#[instrument(skip(state))]
pub async fn enrich_sentence(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<TutorRequest>,
) -> Result<Json<TutorResponse>, AppError> {
    let response = TutorService::enrich(state.llm.as_ref(), dto).await?;
    Ok(Json(response))
}
