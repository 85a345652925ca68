use crate::state::AppState;
use axum::{Router, routing::post};

use super::controller::invite_user;

pub fn init_invites_router() -> Router<AppState> {
    Router::new().route("/", post(invite_user))
}
