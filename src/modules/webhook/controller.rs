use axum::Json;
use serde_json::{Value, json};
use tracing::{info, instrument};

/// Receive a billing-provider event
///
/// Acknowledges every payload; event handling is asynchronous and never
/// blocks the provider's delivery.
#[utoipa::path(
    post,
    path = "/api/webhook",
    responses(
        (status = 200, description = "Event acknowledged")
    ),
    tag = "Webhook"
)]
#[instrument(skip(event))]
pub async fn receive_webhook(Json(event): Json<Value>) -> Json<Value> {
    let event_type = event
        .get("type")
        .and_then(Value::as_str)
        .unwrap_or("unknown");

    info!(event_type, "billing webhook received");

    Json(json!({ "received": true }))
}
