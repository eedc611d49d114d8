//! Password recovery actions: the forgot-password request and the reset
//! that follows the emailed token.
//!
//! Neither action ever issues a session; after a successful reset the user
//! signs in again. The forgot-password message is passed through for UI
//! display regardless of whether an account exists — the remote API
//! answers identically either way, and this gateway must not undo that.

use crate::{
    bridge::{types::MessageResponse, Auth},
    portiko::{handlers, state::GatewayState},
    schema::{ForgotPasswordInput, ResetPasswordInput, Schema},
};
use axum::{extract::Extension, http::StatusCode, response::IntoResponse, Json};
use reqwest::Method;
use std::sync::Arc;

#[utoipa::path(
    post,
    path = "/api/auth/forgot-password",
    request_body = ForgotPasswordInput,
    responses(
        (status = 200, description = "Reset instructions requested", body = handlers::ActionResponse),
        (status = 400, description = "Validation failed", body = handlers::ActionResponse),
    ),
    tag = "auth"
)]
pub async fn forgot_password(
    state: Extension<Arc<GatewayState>>,
    payload: Option<Json<ForgotPasswordInput>>,
) -> impl IntoResponse {
    let Some(Json(input)) = payload else {
        return (
            StatusCode::BAD_REQUEST,
            Json(handlers::ActionResponse::failure("Missing payload")),
        )
            .into_response();
    };

    let result: Result<MessageResponse, _> = state
        .bridge()
        .send(
            Method::POST,
            "/auth/forgot-password",
            Some(&input),
            Auth::None,
        )
        .await;

    match result {
        Ok(response) => (
            StatusCode::OK,
            Json(handlers::ActionResponse::with_message(handlers::message_or(
                response.message,
                "Password reset email sent",
            ))),
        )
            .into_response(),
        Err(error) => handlers::failure_response(&error),
    }
}

#[utoipa::path(
    post,
    path = "/api/auth/reset-password",
    request_body = ResetPasswordInput,
    responses(
        (status = 200, description = "Password reset; sign in again", body = handlers::ActionResponse),
        (status = 400, description = "Validation failed (mismatched confirmation included)", body = handlers::ActionResponse),
    ),
    tag = "auth"
)]
pub async fn reset_password(
    state: Extension<Arc<GatewayState>>,
    payload: Option<Json<ResetPasswordInput>>,
) -> impl IntoResponse {
    let Some(Json(input)) = payload else {
        return (
            StatusCode::BAD_REQUEST,
            Json(handlers::ActionResponse::failure("Missing payload")),
        )
            .into_response();
    };

    // The confirmation check only exists on the full form; run it before
    // the confirmation field is stripped for transmission.
    if let Err(errors) = input.validate() {
        return (
            StatusCode::BAD_REQUEST,
            Json(handlers::ActionResponse::failure(errors.first_message())),
        )
            .into_response();
    }

    let api_payload = input.into_payload();
    let result: Result<MessageResponse, _> = state
        .bridge()
        .send(
            Method::POST,
            "/auth/reset-password",
            Some(&api_payload),
            Auth::None,
        )
        .await;

    match result {
        Ok(response) => (
            StatusCode::OK,
            Json(handlers::ActionResponse::with_message(handlers::message_or(
                response.message,
                "Password reset successfully",
            ))),
        )
            .into_response(),
        Err(error) => handlers::failure_response(&error),
    }
}
