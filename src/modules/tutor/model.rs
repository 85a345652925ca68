use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// A sentence-enrichment request.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct TutorRequest {
    /// What the learner wrote.
    #[validate(length(min = 1, message = "text must not be empty"))]
    pub text: String,
    /// Language the tutor should answer in.
    #[validate(length(min = 2, message = "lng_target must be a language name or code"))]
    pub lng_target: String,
    /// Language the learner wrote in.
    #[serde(default = "default_source_language")]
    pub lng_source: String,
}

fn default_source_language() -> String {
    "es".to_string()
}

#[derive(Debug, Serialize, ToSchema)]
pub struct TutorResponse {
    pub response: String,
}
