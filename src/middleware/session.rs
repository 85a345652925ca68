use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::config::session::SessionConfig;
use crate::utils::errors::AppError;
use crate::utils::jwt::verify_session_token;

/// The authenticated-user context derived from request credentials.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct SessionUser {
    pub id: Uuid,
    pub email: String,
    pub plan: String,
    pub credits: i32,
    pub lang: String,
}

/// Per-request session state. Never persisted; derived fresh on every
/// request that reaches session resolution.
#[derive(Debug, Clone)]
pub enum Session {
    Authenticated(SessionUser),
    Anonymous,
}

impl Session {
    pub fn is_authenticated(&self) -> bool {
        matches!(self, Session::Authenticated(_))
    }
}

/// Resolves a session cookie value to a user, if any.
///
/// `Ok(None)` means "no session" (expired, malformed, or unknown token);
/// `Err` means the backend itself failed and the caller must pick a policy.
#[async_trait]
pub trait SessionStore: Send + Sync {
    async fn resolve(&self, token: &str) -> Result<Option<SessionUser>, AppError>;
}

/// Production store: the cookie carries a signed session token, and the
/// subject is looked up in the users table on every resolution so revoked
/// accounts drop out immediately.
pub struct JwtSessionStore {
    db: PgPool,
    config: SessionConfig,
}

impl JwtSessionStore {
    pub fn new(db: PgPool, config: SessionConfig) -> Self {
        Self { db, config }
    }
}

#[async_trait]
impl SessionStore for JwtSessionStore {
    async fn resolve(&self, token: &str) -> Result<Option<SessionUser>, AppError> {
        let Ok(claims) = verify_session_token(token, &self.config) else {
            return Ok(None);
        };

        let Ok(user_id) = Uuid::parse_str(&claims.sub) else {
            return Ok(None);
        };

        let user = sqlx::query_as::<_, SessionUser>(
            "SELECT id, email, plan, credits, lang FROM users WHERE id = $1",
        )
        .bind(user_id)
        .fetch_optional(&self.db)
        .await
        .map_err(AppError::database)?;

        Ok(user)
    }
}
