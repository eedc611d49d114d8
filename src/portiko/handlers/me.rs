use crate::{
    bridge::{types::MeResponse, Auth, NO_BODY},
    portiko::{handlers, state::GatewayState},
    session,
};
use axum::{
    extract::Extension,
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use reqwest::Method;
use std::sync::Arc;

#[utoipa::path(
    get,
    path = "/api/auth/me",
    responses(
        (status = 200, description = "The authenticated user", body = handlers::ActionResponse),
        (status = 401, description = "Missing or rejected session", body = handlers::ActionResponse),
    ),
    tag = "auth"
)]
pub async fn me(state: Extension<Arc<GatewayState>>, headers: HeaderMap) -> impl IntoResponse {
    let token = session::resolve_token(None, &headers);

    let result: Result<MeResponse, _> = state
        .bridge()
        .send(
            Method::GET,
            "/auth/me",
            NO_BODY,
            Auth::Required(token.as_deref()),
        )
        .await;

    match result {
        Ok(response) => (
            StatusCode::OK,
            Json(handlers::ActionResponse::with_user(response.user)),
        )
            .into_response(),
        Err(error) => handlers::failure_response(&error),
    }
}
