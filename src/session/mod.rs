//! Session cookie handling.
//!
//! The session is a single opaque token issued by the remote API and
//! carried in the `auth_token` cookie: `HttpOnly`, `SameSite=Strict`,
//! `Path=/`, one-day `Max-Age`, `Secure` when the deployment serves HTTPS.
//! The token is never mutated in place — a new login replaces it, a logout
//! clears it with an immediately-expired value.

use axum::http::{
    header::{InvalidHeaderValue, COOKIE},
    HeaderMap, HeaderValue,
};

pub mod store;

pub const SESSION_COOKIE_NAME: &str = "auth_token";

/// One day, the fixed session lifetime.
pub const DEFAULT_SESSION_TTL_SECONDS: i64 = 86400;

/// Cookie attributes that vary per deployment.
#[derive(Debug, Clone, Copy)]
pub struct CookieConfig {
    secure: bool,
    max_age_seconds: i64,
}

impl CookieConfig {
    #[must_use]
    pub const fn new(secure: bool, max_age_seconds: i64) -> Self {
        Self {
            secure,
            max_age_seconds,
        }
    }

    #[must_use]
    pub const fn secure(&self) -> bool {
        self.secure
    }

    #[must_use]
    pub const fn max_age_seconds(&self) -> i64 {
        self.max_age_seconds
    }
}

impl Default for CookieConfig {
    fn default() -> Self {
        Self::new(false, DEFAULT_SESSION_TTL_SECONDS)
    }
}

/// Build the `HttpOnly` session cookie for a freshly issued token.
///
/// # Errors
/// Returns an error if the token contains bytes not allowed in a header
/// value.
pub fn session_cookie(
    config: &CookieConfig,
    token: &str,
) -> Result<HeaderValue, InvalidHeaderValue> {
    let max_age = config.max_age_seconds();
    let mut cookie = format!(
        "{SESSION_COOKIE_NAME}={token}; Path=/; HttpOnly; SameSite=Strict; Max-Age={max_age}"
    );
    if config.secure() {
        cookie.push_str("; Secure");
    }
    HeaderValue::from_str(&cookie)
}

/// Build the expired cookie that clears the session.
///
/// # Errors
/// Returns an error if the header value cannot be constructed.
pub fn clear_session_cookie(config: &CookieConfig) -> Result<HeaderValue, InvalidHeaderValue> {
    let mut cookie =
        format!("{SESSION_COOKIE_NAME}=; Path=/; HttpOnly; SameSite=Strict; Max-Age=0");
    if config.secure() {
        cookie.push_str("; Secure");
    }
    HeaderValue::from_str(&cookie)
}

/// Read the session token from the request `Cookie` header, if present.
///
/// A cleared cookie (empty value) counts as absent.
#[must_use]
pub fn token_from_headers(headers: &HeaderMap) -> Option<String> {
    let header = headers.get(COOKIE)?;
    let value = header.to_str().ok()?;
    for pair in value.split(';') {
        let trimmed = pair.trim();
        let mut parts = trimmed.splitn(2, '=');
        let key = parts.next()?.trim();
        let val = parts.next()?.trim();
        if key == SESSION_COOKIE_NAME && !val.is_empty() {
            return Some(val.to_string());
        }
    }
    None
}

/// Whether the request carries a session cookie at all. Presence only;
/// validity stays with the remote API.
#[must_use]
pub fn has_session_cookie(headers: &HeaderMap) -> bool {
    token_from_headers(headers).is_some()
}

/// Resolve the session token for an outbound call: explicit argument
/// first, then the cookie store, otherwise absent.
#[must_use]
pub fn resolve_token(explicit: Option<&str>, headers: &HeaderMap) -> Option<String> {
    if let Some(token) = explicit {
        if !token.is_empty() {
            return Some(token.to_string());
        }
    }
    token_from_headers(headers)
}
