//! Authenticated profile endpoints, proxied to the remote `/profile`.

use crate::{
    bridge::{types::MeResponse, Auth, NO_BODY},
    portiko::{handlers, state::GatewayState},
    schema::ProfileUpdateInput,
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
    path = "/api/profile",
    responses(
        (status = 200, description = "The authenticated user's profile", body = handlers::ActionResponse),
        (status = 401, description = "Missing session cookie", body = handlers::ActionResponse),
    ),
    tag = "profile"
)]
pub async fn get_profile(
    state: Extension<Arc<GatewayState>>,
    headers: HeaderMap,
) -> impl IntoResponse {
    let token = session::resolve_token(None, &headers);

    let result: Result<MeResponse, _> = state
        .bridge()
        .send(
            Method::GET,
            "/profile",
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

#[utoipa::path(
    put,
    path = "/api/profile",
    request_body = ProfileUpdateInput,
    responses(
        (status = 200, description = "Profile updated", body = handlers::ActionResponse),
        (status = 400, description = "Validation failed", body = handlers::ActionResponse),
        (status = 401, description = "Missing session cookie", body = handlers::ActionResponse),
    ),
    tag = "profile"
)]
pub async fn update_profile(
    state: Extension<Arc<GatewayState>>,
    headers: HeaderMap,
    payload: Option<Json<ProfileUpdateInput>>,
) -> impl IntoResponse {
    let Some(Json(input)) = payload else {
        return (
            StatusCode::BAD_REQUEST,
            Json(handlers::ActionResponse::failure("Missing payload")),
        )
            .into_response();
    };

    let token = session::resolve_token(None, &headers);

    let result: Result<MeResponse, _> = state
        .bridge()
        .send(
            Method::PUT,
            "/profile",
            Some(&input),
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
