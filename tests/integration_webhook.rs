mod common;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use common::{StaticSessionStore, StubLanguageModel, test_app};
use http_body_util::BodyExt;
use serde_json::json;
use tower::ServiceExt;

#[tokio::test]
async fn webhook_acknowledges_events_without_a_session() {
    let store = StaticSessionStore::empty();
    let app = test_app(store.clone(), StubLanguageModel::replying("ok"));

    let request = Request::builder()
        .method("POST")
        .uri("/api/webhook")
        .header("content-type", "application/json")
        .body(Body::from(
            serde_json::to_string(&json!({
                "type": "checkout.completed",
                "data": { "email": "payer@example.com" }
            }))
            .unwrap(),
        ))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(store.lookups(), 0);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let body: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(body["received"], true);
}

#[tokio::test]
async fn webhook_rejects_non_post_methods() {
    let app = test_app(
        StaticSessionStore::empty(),
        StubLanguageModel::replying("ok"),
    );

    let request = Request::builder()
        .method("GET")
        .uri("/api/webhook")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}
