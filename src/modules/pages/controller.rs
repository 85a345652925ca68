//! Server-rendered page shells.
//!
//! The real page content is rendered client-side; these handlers exist so
//! every route the access gate classifies actually resolves. Markup is
//! deliberately minimal.

use axum::extract::Path;
use axum::response::Html;
use tracing::instrument;

fn page(title: &str, body: &str) -> Html<String> {
    Html(format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head><meta charset=\"utf-8\"><title>{title} \u{2013} Fablingo</title></head>\n<body>{body}</body>\n</html>"
    ))
}

/// Landing page: the only page anonymous visitors can reach directly.
#[instrument]
pub async fn landing_page() -> Html<String> {
    page(
        "Learn languages through stories",
        "<h1>Fablingo</h1>\
         <p>Write stories with your favorite characters and let the tutor \
         turn your sentences into natural, native-sounding prose.</p>\
         <p>Fablingo is invite-only for now.</p>",
    )
}

#[instrument]
pub async fn legal_page() -> Html<String> {
    page(
        "Legal",
        "<h1>Legal</h1><p>Terms of service and privacy policy.</p>",
    )
}

/// Where freshly signed-in users land after the auth callback.
#[instrument]
pub async fn success_page() -> Html<String> {
    page(
        "Welcome",
        "<h1>You are in!</h1><p>Your account is ready. Start your first story.</p>",
    )
}

#[instrument]
pub async fn validation_page() -> Html<String> {
    page(
        "Check your inbox",
        "<h1>Almost there</h1><p>Follow the link we emailed you to continue.</p>",
    )
}

/// Shared-story link target.
#[instrument]
pub async fn share_page(Path(slug): Path<String>) -> Html<String> {
    page("Shared story", &format!("<h1>Story {slug}</h1>"))
}

/// Read-only story preview, reachable without an account.
#[instrument]
pub async fn preview_page(Path(rest): Path<String>) -> Html<String> {
    page("Preview", &format!("<h1>Preview: {rest}</h1>"))
}

/// Public reader view of a published story.
#[instrument]
pub async fn my_story_page(Path(rest): Path<String>) -> Html<String> {
    page("My story", &format!("<h1>My story: {rest}</h1>"))
}
