//! Session hydration for the UI shell.
//!
//! The handler builds a request-scoped [`SessionStore`], resolves the
//! cookie, and asks the remote API who the token belongs to. Any upstream
//! rejection — expired token, revoked session, network fault — collapses
//! into `{authenticated: false}` with status 200: the UI learns nothing
//! about why, only that there is no session to restore.

use crate::{
    bridge::{types::MeResponse, Auth, NO_BODY},
    portiko::state::GatewayState,
    session::{self, store::SessionStore},
};
use axum::{extract::Extension, http::HeaderMap, response::IntoResponse, Json};
use reqwest::Method;
use serde::Serialize;
use std::sync::Arc;
use tracing::debug;
use utoipa::ToSchema;

/// Public view of the request's session state.
#[derive(Debug, Serialize, ToSchema)]
pub struct SessionView {
    pub authenticated: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<crate::bridge::types::User>,
}

impl SessionView {
    fn from_store(store: &SessionStore) -> Self {
        Self {
            authenticated: store.is_authenticated(),
            user: store.user().cloned(),
        }
    }
}

#[utoipa::path(
    get,
    path = "/api/session",
    responses(
        (status = 200, description = "Current session state, authenticated or not", body = SessionView)
    ),
    tag = "auth"
)]
pub async fn session(
    state: Extension<Arc<GatewayState>>,
    headers: HeaderMap,
) -> impl IntoResponse {
    let mut store = SessionStore::new();
    store.set_loading(true);

    if let Some(token) = session::resolve_token(None, &headers) {
        let result: Result<MeResponse, _> = state
            .bridge()
            .send(
                Method::GET,
                "/auth/me",
                NO_BODY,
                Auth::Required(Some(token.as_str())),
            )
            .await;

        match result {
            Ok(response) => store.login(response.user, token),
            Err(err) => {
                debug!("Session hydration failed: {err}");
                store.logout();
            }
        }
    }

    store.set_loading(false);

    Json(SessionView::from_store(&store))
}
