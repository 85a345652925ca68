use crate::state::AppState;
use axum::{Router, routing::post};

use super::controller::receive_webhook;

pub fn init_webhook_router() -> Router<AppState> {
    Router::new().route("/", post(receive_webhook))
}
