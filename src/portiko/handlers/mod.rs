pub mod health;
pub use self::health::health;

pub mod login;
pub use self::login::login;

pub mod register;
pub use self::register::register;

pub mod logout;
pub use self::logout::logout;

pub mod password;
pub use self::password::{forgot_password, reset_password};

pub mod profile;
pub use self::profile::{get_profile, update_profile};

pub mod me;
pub use self::me::me;

pub mod session;
pub use self::session::session;

// common result shape and error mapping for the handlers
use crate::bridge::{types::User, BridgeError};
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use utoipa::ToSchema;

/// The uniform action result. Every auth action collapses into this shape;
/// callers read the message, never the failure kind.
#[derive(Debug, Serialize, ToSchema)]
pub struct ActionResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<User>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ActionResponse {
    #[must_use]
    pub fn with_user(user: User) -> Self {
        Self {
            success: true,
            user: Some(user),
            message: None,
            error: None,
        }
    }

    #[must_use]
    pub fn with_message(message: impl Into<String>) -> Self {
        Self {
            success: true,
            user: None,
            message: Some(message.into()),
            error: None,
        }
    }

    #[must_use]
    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            success: false,
            user: None,
            message: None,
            error: Some(error.into()),
        }
    }
}

/// HTTP status for a bridge failure: local validation is the caller's
/// fault, a missing session is unauthorized, remote statuses pass through,
/// and transport faults read as a bad gateway.
pub(crate) fn error_status(error: &BridgeError) -> StatusCode {
    match error {
        BridgeError::Validation(_) => StatusCode::BAD_REQUEST,
        BridgeError::AuthRequired => StatusCode::UNAUTHORIZED,
        BridgeError::Remote { status, .. } => *status,
        BridgeError::Transport(_) => StatusCode::BAD_GATEWAY,
    }
}

pub(crate) fn failure_response(error: &BridgeError) -> Response {
    (
        error_status(error),
        Json(ActionResponse::failure(error.to_string())),
    )
        .into_response()
}

/// Fallback text when a remote message body comes back empty.
pub(crate) fn message_or(message: String, fallback: &str) -> String {
    if message.is_empty() {
        fallback.to_string()
    } else {
        message
    }
}
