use utoipa::openapi::security::{ApiKey, ApiKeyValue, SecurityScheme};
use utoipa::{Modify, OpenApi, ToSchema};

use crate::modules::invites::model::{InviteRequest, InviteResponse, User};
use crate::modules::tutor::model::{TutorRequest, TutorResponse};

#[derive(ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::modules::tutor::controller::enrich_sentence,
        crate::modules::invites::controller::invite_user,
        crate::modules::webhook::controller::receive_webhook,
    ),
    components(
        schemas(
            TutorRequest,
            TutorResponse,
            InviteRequest,
            InviteResponse,
            User,
            ErrorResponse,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Tutor", description = "Sentence enrichment backed by the LLM provider"),
        (name = "Invites", description = "User invitation and provisioning"),
        (name = "Webhook", description = "Billing provider callbacks")
    ),
    info(
        title = "Fablingo API",
        version = "0.1.0",
        description = "Language-learning storytelling app: invite-only accounts, a sentence-enrichment tutor, and session-gated pages.",
        contact(
            name = "API Support",
            email = "support@fablingo.app"
        ),
        license(
            name = "MIT"
        )
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "session_cookie",
                SecurityScheme::ApiKey(ApiKey::Cookie(ApiKeyValue::new("fablingo_session"))),
            )
        }
    }
}
