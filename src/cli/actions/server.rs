use crate::{bridge::ApiBridge, portiko, portiko::state::GatewayState, session::CookieConfig};
use anyhow::Result;
use std::{path::PathBuf, sync::Arc};
use tracing::debug;

#[derive(Debug)]
pub struct Args {
    pub port: u16,
    pub api_url: String,
    pub assets_dir: String,
    pub session_ttl_seconds: i64,
    pub secure_cookies: bool,
}

/// Execute the server action.
/// # Errors
/// Returns an error if the bridge cannot be built or the server fails to
/// start.
pub async fn execute(args: Args) -> Result<()> {
    debug!("Gateway args: {:?}", args);

    let bridge = ApiBridge::new(&args.api_url)?;
    let cookies = CookieConfig::new(args.secure_cookies, args.session_ttl_seconds);
    let state = Arc::new(GatewayState::new(bridge, cookies));

    let assets_dir = PathBuf::from(args.assets_dir);

    portiko::new(args.port, state, &assets_dir).await
}
