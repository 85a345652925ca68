use crate::state::AppState;
use axum::{Router, routing::post};

use super::controller::enrich_sentence;

pub fn init_tutor_router() -> Router<AppState> {
    Router::new().route("/", post(enrich_sentence))
}
