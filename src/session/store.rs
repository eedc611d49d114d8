//! Session state container for the UI layer.
//!
//! `SessionStore` mirrors the authenticated user inside one execution
//! context — one server request or one UI instance — and is plain data:
//! no interior mutability, no locking. The identity subset (`user`,
//! `token`, `is_authenticated`) survives restarts through
//! [`SessionSnapshot`]; `is_loading` and `error` are transient UI state
//! and never persisted.

use crate::bridge::types::User;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionStore {
    user: Option<User>,
    token: Option<String>,
    is_authenticated: bool,
    is_loading: bool,
    error: Option<String>,
}

impl SessionStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a store from its persisted subset. Transient flags start
    /// cleared.
    #[must_use]
    pub fn hydrate(snapshot: SessionSnapshot) -> Self {
        Self {
            user: snapshot.user,
            token: snapshot.token,
            is_authenticated: snapshot.is_authenticated,
            is_loading: false,
            error: None,
        }
    }

    #[must_use]
    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    #[must_use]
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.is_authenticated
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Record a successful login: identity fields set, error cleared.
    pub fn login(&mut self, user: User, token: impl Into<String>) {
        self.user = Some(user);
        self.token = Some(token.into());
        self.is_authenticated = true;
        self.error = None;
    }

    /// Clear the identity fields. Transient flags are left alone.
    pub fn logout(&mut self) {
        self.user = None;
        self.token = None;
        self.is_authenticated = false;
    }

    pub fn set_loading(&mut self, loading: bool) {
        self.is_loading = loading;
    }

    pub fn set_error(&mut self, error: impl Into<String>) {
        self.error = Some(error.into());
    }

    pub fn clear_error(&mut self) {
        self.error = None;
    }

    /// The persisted subset of the store.
    #[must_use]
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            user: self.user.clone(),
            token: self.token.clone(),
            is_authenticated: self.is_authenticated,
        }
    }
}

/// Durable view of a [`SessionStore`], written to whatever client storage
/// the embedding UI provides.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub user: Option<User>,
    pub token: Option<String>,
    pub is_authenticated: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user() -> User {
        User {
            id: 1,
            email: "user@example.com".to_string(),
            first_name: Some("Ana".to_string()),
            last_name: Some("Moreno".to_string()),
            created_at: "2025-06-01T12:00:00Z".to_string(),
        }
    }

    #[test]
    fn login_sets_identity_and_clears_error() {
        let mut store = SessionStore::new();
        store.set_error("previous failure");
        store.login(user(), "t1");

        assert!(store.is_authenticated());
        assert_eq!(store.token(), Some("t1"));
        assert_eq!(store.user().map(|u| u.id), Some(1));
        assert_eq!(store.error(), None);
    }

    #[test]
    fn logout_clears_identity_fields() {
        let mut store = SessionStore::new();
        store.login(user(), "t1");
        store.logout();

        assert!(!store.is_authenticated());
        assert_eq!(store.token(), None);
        assert!(store.user().is_none());
    }

    #[test]
    fn loading_and_error_flags_are_independent() {
        let mut store = SessionStore::new();
        store.set_loading(true);
        store.set_error("boom");
        assert!(store.is_loading());
        assert_eq!(store.error(), Some("boom"));

        store.clear_error();
        assert_eq!(store.error(), None);
        assert!(store.is_loading());
    }

    #[test]
    fn snapshot_excludes_transient_state() {
        let mut store = SessionStore::new();
        store.login(user(), "t1");
        store.set_loading(true);
        store.set_error("stale");

        let snapshot = store.snapshot();
        let json = serde_json::to_value(&snapshot).expect("snapshot serializes");
        assert!(json.get("is_loading").is_none());
        assert!(json.get("error").is_none());
        assert_eq!(json["token"], "t1");
        assert_eq!(json["is_authenticated"], true);
    }

    #[test]
    fn hydrate_round_trips_the_persisted_subset() {
        let mut store = SessionStore::new();
        store.login(user(), "t1");
        store.set_loading(true);
        store.set_error("stale");

        let restored = SessionStore::hydrate(store.snapshot());
        assert!(restored.is_authenticated());
        assert_eq!(restored.token(), Some("t1"));
        assert_eq!(restored.user(), store.user());
        assert!(!restored.is_loading());
        assert_eq!(restored.error(), None);
    }
}
