use crate::{
    bridge::{types::MessageResponse, Auth, NO_BODY},
    portiko::{handlers, state::GatewayState},
    session,
};
use axum::{
    extract::Extension,
    http::{header::SET_COOKIE, HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use reqwest::Method;
use std::sync::Arc;
use tracing::{debug, error};

#[utoipa::path(
    post,
    path = "/api/auth/logout",
    responses(
        (status = 200, description = "Session cookie cleared", body = handlers::ActionResponse)
    ),
    tag = "auth"
)]
pub async fn logout(
    state: Extension<Arc<GatewayState>>,
    headers: HeaderMap,
) -> impl IntoResponse {
    let token = session::resolve_token(None, &headers);

    // Best effort: the remote call invalidates the token server-side, but
    // clearing the cookie is the effect the caller depends on.
    let result: Result<MessageResponse, _> = state
        .bridge()
        .send(
            Method::POST,
            "/auth/logout",
            NO_BODY,
            Auth::Required(token.as_deref()),
        )
        .await;
    if let Err(err) = result {
        debug!("Remote logout failed: {err}");
    }

    // Always clear the cookie, even if the remote call failed.
    let mut response_headers = HeaderMap::new();
    match session::clear_session_cookie(state.cookies()) {
        Ok(cookie) => {
            response_headers.insert(SET_COOKIE, cookie);
        }
        Err(err) => error!("Failed to build clearing cookie: {err}"),
    }

    (
        StatusCode::OK,
        response_headers,
        Json(handlers::ActionResponse::with_message(
            "Logged out successfully",
        )),
    )
        .into_response()
}
