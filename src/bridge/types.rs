//! Wire types for the remote identity API contract.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// The account record as the remote API reports it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct User {
    pub id: i64,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    pub created_at: String,
}

/// Successful login/register body: the issued token plus its user.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AuthResponse {
    pub token: String,
    pub user: User,
}

/// Message-only responses (logout, forgot-password, reset-password).
/// The field is defaulted so a terse remote body never turns into a parse
/// fault; actions substitute their own fallback text for an empty message.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    #[serde(default)]
    pub message: String,
}

/// `/auth/me` wraps the user record.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MeResponse {
    pub user: User,
}
