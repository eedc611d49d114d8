//! Command-line argument dispatch and server initialization.
//!
//! This module parses validated CLI arguments and maps them to the
//! appropriate action, such as starting the gateway with its full
//! configuration state.

use crate::cli::actions::{server::Args, Action};
use crate::cli::commands;
use anyhow::{Context, Result};
use url::Url;

/// Map validated CLI matches to a server action.
///
/// # Errors
/// Returns an error if required arguments are missing or inconsistent.
pub fn handler(matches: &clap::ArgMatches) -> Result<Action> {
    let port = matches
        .get_one::<u16>(commands::ARG_PORT)
        .copied()
        .unwrap_or(3000);

    let api_url = matches
        .get_one::<String>(commands::ARG_API_URL)
        .cloned()
        .unwrap_or_else(|| commands::DEFAULT_API_URL.to_string());

    // Catch malformed upstream addresses before the server starts.
    Url::parse(&api_url).with_context(|| format!("invalid PORTIKO_API_URL: {api_url}"))?;

    let assets_dir = matches
        .get_one::<String>(commands::ARG_ASSETS_DIR)
        .cloned()
        .unwrap_or_else(|| "dist".to_string());

    let session_ttl_seconds = matches
        .get_one::<i64>(commands::ARG_SESSION_TTL)
        .copied()
        .unwrap_or(86400);

    let secure_cookies = matches.get_flag(commands::ARG_SECURE_COOKIES);

    Ok(Action::Server(Args {
        port,
        api_url,
        assets_dir,
        session_ttl_seconds,
        secure_cookies,
    }))
}
