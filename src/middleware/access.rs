//! Request gate evaluated for every incoming request.
//!
//! The checks run in a strict order chosen to avoid auth-backend round-trips
//! wherever possible: route classification is consulted before any session
//! lookup, so public pages, assets, and webhook/tutor traffic never touch
//! the session store.

use axum::{
    extract::{Request, State},
    http::{StatusCode, header},
    middleware::Next,
    response::{IntoResponse, Response},
};
use axum_extra::extract::CookieJar;
use tracing::warn;

use crate::config::routes::CHALLENGE_TOKEN_PARAM;
use crate::middleware::session::Session;
use crate::state::AppState;

/// Gate a request: pass through, or redirect to the root page.
///
/// Order matters and is load-bearing:
/// 1. public-route table (no session lookup),
/// 2. image assets,
/// 3. bot-challenge replays (neutralized with a redirect),
/// 4. the auth callback (it establishes the session itself),
/// 5. session resolution — the only step that performs I/O,
/// 6. anonymous requests anywhere but the root page are redirected.
pub async fn access_middleware(
    State(state): State<AppState>,
    jar: CookieJar,
    req: Request,
    next: Next,
) -> Response {
    let path = req.uri().path();
    let routes = &state.routes_config;

    if routes.is_excluded(path) {
        return next.run(req).await;
    }

    if routes.is_public(path) {
        return next.run(req).await;
    }

    if routes.is_asset(path) {
        return next.run(req).await;
    }

    if has_challenge_token(req.uri().query()) {
        return redirect_to_root(&state.session_config.cookie_name);
    }

    if routes.is_auth_callback(path) {
        return next.run(req).await;
    }

    let session = resolve_session(&state, &jar).await;

    if !session.is_authenticated() && path != "/" {
        return redirect_to_root(&state.session_config.cookie_name);
    }

    // Authenticated requests, and anonymous requests to the root page,
    // continue to the router.
    next.run(req).await
}

/// Resolve the session cookie against the session store.
///
/// Lookup failures are fail-closed: the request proceeds as anonymous
/// rather than surfacing a 500 from the gate.
async fn resolve_session(state: &AppState, jar: &CookieJar) -> Session {
    let Some(cookie) = jar.get(&state.session_config.cookie_name) else {
        return Session::Anonymous;
    };

    match state.sessions.resolve(cookie.value()).await {
        Ok(Some(user)) => Session::Authenticated(user),
        Ok(None) => Session::Anonymous,
        Err(err) => {
            warn!(error = %err.error, "session lookup failed, treating request as anonymous");
            Session::Anonymous
        }
    }
}

fn has_challenge_token(query: Option<&str>) -> bool {
    query.is_some_and(|q| {
        q.split('&').any(|pair| {
            let key = pair.split('=').next().unwrap_or(pair);
            key == CHALLENGE_TOKEN_PARAM
        })
    })
}

/// 303 (See Other, forcing GET) to the root page, with the session cookie
/// suppressed on the way out.
fn redirect_to_root(session_cookie_name: &str) -> Response {
    let mut response =
        (StatusCode::SEE_OTHER, [(header::LOCATION, "/")], "").into_response();
    suppress_session_cookie(&mut response, session_cookie_name);
    response
}

/// A redirect that abandons a session attempt must never also persist one:
/// drop any `Set-Cookie` header targeting the session cookie before the
/// response leaves the gate.
pub fn suppress_session_cookie(response: &mut Response, session_cookie_name: &str) {
    let prefix = format!("{session_cookie_name}=");
    let kept: Vec<_> = response
        .headers()
        .get_all(header::SET_COOKIE)
        .iter()
        .filter(|value| {
            value
                .to_str()
                .map(|s| !s.starts_with(prefix.as_str()))
                .unwrap_or(true)
        })
        .cloned()
        .collect();

    response.headers_mut().remove(header::SET_COOKIE);
    for value in kept {
        response.headers_mut().append(header::SET_COOKIE, value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn challenge_token_detected_with_and_without_value() {
        assert!(has_challenge_token(Some("_cf_chl_tk=abc123")));
        assert!(has_challenge_token(Some("_cf_chl_tk")));
        assert!(has_challenge_token(Some("a=1&_cf_chl_tk=x&b=2")));
        assert!(!has_challenge_token(Some("a=1&b=2")));
        assert!(!has_challenge_token(Some("token=_cf_chl_tk")));
        assert!(!has_challenge_token(None));
    }

    #[test]
    fn suppress_removes_only_the_session_cookie() {
        let mut response = Response::new(axum::body::Body::empty());
        response.headers_mut().append(
            header::SET_COOKIE,
            HeaderValue::from_static("fablingo_session=abc; Path=/"),
        );
        response.headers_mut().append(
            header::SET_COOKIE,
            HeaderValue::from_static("theme=dark; Path=/"),
        );

        suppress_session_cookie(&mut response, "fablingo_session");

        let remaining: Vec<_> = response
            .headers()
            .get_all(header::SET_COOKIE)
            .iter()
            .collect();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0], "theme=dark; Path=/");
    }

    #[test]
    fn redirect_carries_303_and_location() {
        let response = redirect_to_root("fablingo_session");

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(response.headers()[header::LOCATION], "/");
        assert!(response.headers().get(header::SET_COOKIE).is_none());
    }
}
