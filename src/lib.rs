//! # Portiko (Session Gateway)
//!
//! `portiko` is the HTTP front end that sits between a browser UI and a
//! remote identity API. It validates form input, forwards it upstream over
//! HTTP, and owns the session cookie the browser carries afterwards.
//!
//! ## Components
//!
//! - **Validation schemas** (`schema`): pure validators for the login,
//!   registration, password-reset, and profile forms. Ordered field errors;
//!   the first message is what the UI shows.
//! - **API bridge** (`bridge`): one outbound entry point that validates,
//!   resolves auth, issues the upstream request, and normalizes every
//!   outcome into a `BridgeError`. Nothing escapes unmapped.
//! - **Session** (`session`): the `auth_token` cookie (`HttpOnly`,
//!   `SameSite=Strict`, one-day `Max-Age`) and a framework-independent
//!   session state container with a persisted subset.
//! - **Route gate** (`portiko::gate`): presence-only cookie check that
//!   redirects unauthenticated page requests to the login page and
//!   authenticated requests away from the auth pages. Token validity is the
//!   remote API's job, not the gate's.
//! - **Actions** (`portiko::handlers`): one thin handler per auth
//!   operation, all collapsing into the same `{success, ...}` result shape.
//!
//! The remote identity API is an external collaborator: portiko never
//! stores credentials, never issues tokens of its own, and keeps no state
//! beyond the cookie it hands to the browser.

pub mod bridge;
pub mod cli;
pub mod portiko;
pub mod schema;
pub mod session;

#[allow(clippy::doc_markdown, clippy::needless_raw_string_hashes)]
pub mod built_info {
    include!(concat!(env!("OUT_DIR"), "/built.rs"));
}

pub const GIT_COMMIT_HASH: &str = match built_info::GIT_COMMIT_HASH {
    Some(hash) => hash,
    None => "unknown",
};

pub const APP_USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"),);
