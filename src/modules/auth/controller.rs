use axum::extract::{Query, State};
use axum::http::{HeaderValue, StatusCode, header};
use axum::response::{IntoResponse, Response};
use tracing::{info, instrument, warn};

use crate::config::session::SessionConfig;
use crate::state::AppState;

use super::model::CallbackParams;
use super::service::AuthService;

/// Magic-link return endpoint: exchanges an invite token for a session
/// cookie and lands the user on the success page.
#[instrument(skip(state, params))]
pub async fn auth_callback(
    State(state): State<AppState>,
    Query(params): Query<CallbackParams>,
) -> Response {
    complete_sign_in(state, params).await
}

/// Email-confirmation endpoint: same exchange as the callback, reached
/// from the link in the invitation email.
#[instrument(skip(state, params))]
pub async fn auth_confirm(
    State(state): State<AppState>,
    Query(params): Query<CallbackParams>,
) -> Response {
    complete_sign_in(state, params).await
}

async fn complete_sign_in(state: AppState, params: CallbackParams) -> Response {
    let Some(token) = params.token else {
        return see_other("/");
    };

    match AuthService::establish_session(&state.db, &token, &state.session_config).await {
        Ok((user, session_token)) => {
            info!(user_id = %user.id, "session established");

            let mut response = see_other("/success");
            if let Ok(cookie) = session_cookie(&state.session_config, &session_token) {
                response.headers_mut().insert(header::SET_COOKIE, cookie);
            }
            response
        }
        Err(err) => {
            warn!(error = %err.error, "sign-in token rejected");
            see_other("/")
        }
    }
}

fn see_other(location: &'static str) -> Response {
    (StatusCode::SEE_OTHER, [(header::LOCATION, location)], "").into_response()
}

fn session_cookie(
    config: &SessionConfig,
    token: &str,
) -> Result<HeaderValue, axum::http::header::InvalidHeaderValue> {
    HeaderValue::from_str(&format!(
        "{}={}; Path=/; HttpOnly; SameSite=Lax; Max-Age={}",
        config.cookie_name, token, config.session_expiry
    ))
}
