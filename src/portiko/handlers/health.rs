use crate::{portiko::state::GatewayState, GIT_COMMIT_HASH};
use axum::{
    extract::Extension,
    http::{Method, StatusCode},
    response::{IntoResponse, Json},
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::ToSchema;

#[derive(ToSchema, Serialize, Deserialize, Debug)]
pub struct Health {
    commit: String,
    name: String,
    version: String,
    upstream: String,
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Gateway is serving", body = Health)
    ),
    tag = "health"
)]
// axum handler for health
pub async fn health(method: Method, state: Extension<Arc<GatewayState>>) -> impl IntoResponse {
    // The gateway holds no connections at rest; health is liveness plus
    // the upstream it is configured against.
    let health = Health {
        commit: GIT_COMMIT_HASH.to_string(),
        name: env!("CARGO_PKG_NAME").to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        upstream: state.bridge().base_url().to_string(),
    };

    if method == Method::GET {
        (StatusCode::OK, Json(health)).into_response()
    } else {
        StatusCode::OK.into_response()
    }
}
