//! User entity and invitation DTOs.
//!
//! Users are provisioned exclusively through invitations: a row is created
//! unconfirmed, and `confirmed_at` is stamped when the invite link is
//! followed.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// A provisioned account.
#[derive(Serialize, Deserialize, FromRow, Debug, Clone, PartialEq, Eq, ToSchema)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    /// Billing plan; every invited user starts on `FREE`.
    pub plan: String,
    pub credits: i32,
    /// Preferred interface language (BCP 47 two-letter code).
    pub lang: String,
    pub invited_at: chrono::DateTime<chrono::Utc>,
    pub confirmed_at: Option<chrono::DateTime<chrono::Utc>>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

/// DTO for inviting a new user.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct InviteRequest {
    #[validate(email(message = "email must be a valid address"))]
    pub email: String,
    #[serde(default = "default_credits")]
    pub credits: i32,
    #[serde(default = "default_lang")]
    pub lang: String,
}

fn default_credits() -> i32 {
    100
}

fn default_lang() -> String {
    "en".to_string()
}

#[derive(Debug, Serialize, ToSchema)]
pub struct InviteResponse {
    pub message: String,
    pub user_id: Uuid,
}
