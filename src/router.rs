use crate::docs::ApiDoc;
use crate::logging::logging_middleware;
use crate::middleware::access::access_middleware;
use crate::modules::auth::router::init_auth_router;
use crate::modules::invites::router::init_invites_router;
use crate::modules::pages::router::init_pages_router;
use crate::modules::tutor::router::init_tutor_router;
use crate::modules::webhook::router::init_webhook_router;
use crate::state::AppState;
use axum::http::{HeaderValue, Method};
use axum::{Router, middleware};
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable as _};
use utoipa_swagger_ui::SwaggerUi;

pub fn init_router(state: AppState) -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .merge(Scalar::with_url("/scalar", ApiDoc::openapi()))
        .merge(init_pages_router())
        .nest("/auth", init_auth_router())
        .nest(
            "/api",
            Router::new()
                .nest("/tutor", init_tutor_router())
                .nest("/invite", init_invites_router())
                .nest("/webhook", init_webhook_router()),
        )
        .with_state(state.clone())
        .layer({
            let allowed_origins: Vec<HeaderValue> = state
                .cors_config
                .allowed_origins
                .iter()
                .filter_map(|origin| origin.parse().ok())
                .collect();

            CorsLayer::new()
                .allow_origin(allowed_origins)
                .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
                .allow_headers([
                    axum::http::header::AUTHORIZATION,
                    axum::http::header::CONTENT_TYPE,
                    axum::http::header::ACCEPT,
                ])
                .allow_credentials(true)
        })
        // The access gate wraps everything, including the docs UIs, so the
        // public-route table is the single source of truth for exposure.
        .layer(middleware::from_fn_with_state(state, access_middleware))
        .layer(middleware::from_fn(logging_middleware))
}
