use crate::{bridge::ApiBridge, session::CookieConfig};

/// Shared gateway state handed to handlers via `Extension`.
///
/// Holds the outbound bridge and the cookie attributes; nothing here is
/// mutable at runtime, so no locking is involved.
#[derive(Debug, Clone)]
pub struct GatewayState {
    bridge: ApiBridge,
    cookies: CookieConfig,
}

impl GatewayState {
    #[must_use]
    pub fn new(bridge: ApiBridge, cookies: CookieConfig) -> Self {
        Self { bridge, cookies }
    }

    #[must_use]
    pub fn bridge(&self) -> &ApiBridge {
        &self.bridge
    }

    #[must_use]
    pub fn cookies(&self) -> &CookieConfig {
        &self.cookies
    }
}
