//! Route gate: the request-time redirect evaluated before any page is
//! served.
//!
//! The decision is a pure function over (cookie presence, path category).
//! Presence only — an expired-but-present cookie passes the gate, and the
//! remote API rejects the stale token on the next authenticated call.

use crate::session;
use axum::{
    extract::Request,
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};

pub const LOGIN_PATH: &str = "/auth/login";
pub const HOME_PATH: &str = "/";

const AUTH_PREFIX: &str = "/auth";

/// Paths the gate never touches: the action API (handlers enforce their
/// own auth), static assets, and the service endpoints.
const OPEN_PREFIXES: &[&str] = &[
    "/api",
    "/assets",
    "/health",
    "/swagger-ui",
    "/api-docs",
    "/favicon.ico",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateDecision {
    Pass,
    RedirectToLogin,
    RedirectToHome,
}

fn path_matches(path: &str, prefix: &str) -> bool {
    path == prefix
        || (path.starts_with(prefix) && path.as_bytes().get(prefix.len()) == Some(&b'/'))
}

/// Decide what to do with a request before it reaches a page route.
#[must_use]
pub fn evaluate(path: &str, has_session: bool) -> GateDecision {
    let is_auth_route = path_matches(path, AUTH_PREFIX);
    let is_open = OPEN_PREFIXES
        .iter()
        .any(|prefix| path_matches(path, prefix));

    if !has_session && !is_auth_route && !is_open {
        return GateDecision::RedirectToLogin;
    }

    if has_session && is_auth_route {
        return GateDecision::RedirectToHome;
    }

    GateDecision::Pass
}

/// Axum middleware applying [`evaluate`] to every request.
pub async fn route_gate(request: Request, next: Next) -> Response {
    let has_session = session::has_session_cookie(request.headers());

    match evaluate(request.uri().path(), has_session) {
        GateDecision::Pass => next.run(request).await,
        GateDecision::RedirectToLogin => Redirect::temporary(LOGIN_PATH).into_response(),
        GateDecision::RedirectToHome => Redirect::temporary(HOME_PATH).into_response(),
    }
}
