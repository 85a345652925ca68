use crate::state::AppState;
use axum::{Router, routing::get};

use super::controller::{
    landing_page, legal_page, my_story_page, preview_page, share_page, success_page,
    validation_page,
};

pub fn init_pages_router() -> Router<AppState> {
    Router::new()
        .route("/", get(landing_page))
        .route("/legal", get(legal_page))
        .route("/success", get(success_page))
        .route("/validation", get(validation_page))
        .route("/s/{slug}", get(share_page))
        .route("/preview/{*rest}", get(preview_page))
        .route("/my-story/{*rest}", get(my_story_page))
}
