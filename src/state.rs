use std::fmt;
use std::sync::Arc;

use sqlx::PgPool;

use crate::config::cors::CorsConfig;
use crate::config::database::init_db_pool;
use crate::config::email::EmailConfig;
use crate::config::llm::LlmConfig;
use crate::config::rate_limit::RateLimitConfig;
use crate::config::routes::RoutesConfig;
use crate::config::session::SessionConfig;
use crate::middleware::session::{JwtSessionStore, SessionStore};
use crate::utils::llm::{ChatCompletionsClient, LanguageModel};

#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    pub session_config: SessionConfig,
    pub email_config: EmailConfig,
    pub cors_config: CorsConfig,
    pub rate_limit_config: RateLimitConfig,
    pub routes_config: RoutesConfig,
    pub sessions: Arc<dyn SessionStore>,
    pub llm: Arc<dyn LanguageModel>,
}

impl fmt::Debug for AppState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppState")
            .field("session_config", &self.session_config)
            .field("email_config", &self.email_config)
            .field("cors_config", &self.cors_config)
            .field("rate_limit_config", &self.rate_limit_config)
            .field("routes_config", &self.routes_config)
            .finish_non_exhaustive()
    }
}

pub async fn init_app_state() -> AppState {
    let db = init_db_pool().await;
    let session_config = SessionConfig::from_env();

    AppState {
        sessions: Arc::new(JwtSessionStore::new(db.clone(), session_config.clone())),
        llm: Arc::new(
            ChatCompletionsClient::new(LlmConfig::from_env())
                .expect("Failed to build LLM client"),
        ),
        db,
        session_config,
        email_config: EmailConfig::from_env(),
        cors_config: CorsConfig::from_env(),
        rate_limit_config: RateLimitConfig::from_env(),
        routes_config: RoutesConfig::default(),
    }
}
