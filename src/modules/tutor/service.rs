use crate::utils::errors::AppError;
use crate::utils::llm::{ChatRequest, LanguageModel};

use super::model::{TutorRequest, TutorResponse};

pub struct TutorService;

impl TutorService {
    /// Reformulate and enrich the learner's sentence in the target
    /// language. The provider does the heavy lifting; this only shapes the
    /// prompt and unwraps the first choice.
    pub async fn enrich(
        llm: &dyn LanguageModel,
        dto: TutorRequest,
    ) -> Result<TutorResponse, AppError> {
        let system = format!(
            "You are a language-learning assistant. Your role is to reformulate and enrich \
             what the user writes by producing a long, natural, fluent, and correct sentence \
             in the target language: {}. Do not translate word for word. Use a natural tone, \
             as if a native speaker were talking casually in a relaxed conversation.",
            dto.lng_target
        );

        let response = llm
            .complete(ChatRequest {
                system,
                user: dto.text,
            })
            .await?;

        Ok(TutorResponse { response })
    }
}
