use crate::state::AppState;
use axum::{Router, routing::get};

use super::controller::{auth_callback, auth_confirm};

pub fn init_auth_router() -> Router<AppState> {
    Router::new()
        .route("/callback", get(auth_callback))
        .route("/confirm", get(auth_confirm))
}
