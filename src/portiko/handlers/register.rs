use crate::{
    bridge::{types::AuthResponse, Auth},
    portiko::{handlers, state::GatewayState},
    schema::RegisterInput,
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
use tracing::error;

#[utoipa::path(
    post,
    path = "/api/auth/register",
    request_body = RegisterInput,
    responses(
        (status = 201, description = "Account created; session cookie set", body = handlers::ActionResponse),
        (status = 400, description = "Validation failed", body = handlers::ActionResponse),
        (status = 409, description = "Remote API rejected the registration", body = handlers::ActionResponse),
    ),
    tag = "auth"
)]
pub async fn register(
    state: Extension<Arc<GatewayState>>,
    payload: Option<Json<RegisterInput>>,
) -> impl IntoResponse {
    let Some(Json(input)) = payload else {
        return (
            StatusCode::BAD_REQUEST,
            Json(handlers::ActionResponse::failure("Missing payload")),
        )
            .into_response();
    };

    let result: Result<AuthResponse, _> = state
        .bridge()
        .send(Method::POST, "/auth/register", Some(&input), Auth::None)
        .await;

    match result {
        Ok(auth) => {
            let cookie = match session::session_cookie(state.cookies(), &auth.token) {
                Ok(cookie) => cookie,
                Err(err) => {
                    error!("Failed to build session cookie: {err}");

                    return (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        Json(handlers::ActionResponse::failure(
                            "Failed to establish session",
                        )),
                    )
                        .into_response();
                }
            };

            let mut headers = HeaderMap::new();
            headers.insert(SET_COOKIE, cookie);

            (
                StatusCode::CREATED,
                headers,
                Json(handlers::ActionResponse::with_user(auth.user)),
            )
                .into_response()
        }
        Err(error) => handlers::failure_response(&error),
    }
}
