//! Outbound HTTP bridge to the remote identity API.
//!
//! One entry point, [`ApiBridge::send`], performs the whole pipeline:
//! schema validation, session-token enforcement, the upstream request, and
//! normalization of every outcome into a [`BridgeError`]. Validation and
//! missing-session failures short-circuit before any network traffic.
//! Nothing panics and no reqwest/serde error escapes unmapped.

use crate::schema::Schema;
use reqwest::{header::CONTENT_TYPE, Client, Method, StatusCode};
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;
use std::fmt;
use tracing::{debug, instrument};

pub mod types;

/// Whether a call needs an established session.
///
/// Handlers resolve the token from the request (explicit argument first,
/// then the session cookie) and hand the result over; the bridge only
/// enforces presence.
#[derive(Debug, Clone, Copy)]
pub enum Auth<'a> {
    None,
    Required(Option<&'a str>),
}

/// Everything that can go wrong between a form submission and the remote
/// API. Callers only ever show the message; the variant decides the HTTP
/// status at the handler boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BridgeError {
    /// Local schema failure, reported with the first field message.
    Validation(String),
    /// An authenticated call was attempted without a session token.
    AuthRequired,
    /// The remote API answered with a non-success status.
    Remote { status: StatusCode, message: String },
    /// Network fault or undecodable response body.
    Transport(String),
}

impl fmt::Display for BridgeError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BridgeError::Validation(message) => write!(formatter, "{message}"),
            BridgeError::AuthRequired => write!(formatter, "Authentication required"),
            BridgeError::Remote { message, .. } => write!(formatter, "{message}"),
            BridgeError::Transport(message) => write!(formatter, "{message}"),
        }
    }
}

impl std::error::Error for BridgeError {}

/// Marker payload for calls that carry no request body.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Empty {}

impl Schema for Empty {
    fn validate(&self) -> Result<(), crate::schema::SchemaErrors> {
        Ok(())
    }
}

/// Convenience for payload-less `send` calls.
pub const NO_BODY: Option<&Empty> = None;

/// HTTP client bound to the remote identity API base URL.
#[derive(Debug, Clone)]
pub struct ApiBridge {
    client: Client,
    base_url: String,
}

impl ApiBridge {
    /// Build a bridge against the given base URL.
    ///
    /// # Errors
    /// Returns an error if the underlying HTTP client cannot be constructed.
    pub fn new(base_url: &str) -> anyhow::Result<Self> {
        let client = Client::builder().user_agent(crate::APP_USER_AGENT).build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint_url(&self, endpoint: &str) -> String {
        format!("{}/{}", self.base_url, endpoint.trim_start_matches('/'))
    }

    /// Validate, authenticate, send, and normalize one remote call.
    ///
    /// # Errors
    /// - [`BridgeError::Validation`] when the payload fails its schema
    ///   (no request is sent);
    /// - [`BridgeError::AuthRequired`] when a session is required but no
    ///   token was resolved (no request is sent);
    /// - [`BridgeError::Remote`] for non-success responses, carrying the
    ///   body's `error` message or a `failed to <method> <endpoint>`
    ///   fallback;
    /// - [`BridgeError::Transport`] for network faults and undecodable
    ///   bodies.
    // `auth` stays out of the span so tokens never reach the logs.
    #[instrument(skip(self, payload, auth), fields(endpoint = %endpoint))]
    pub async fn send<T, P>(
        &self,
        method: Method,
        endpoint: &str,
        payload: Option<&P>,
        auth: Auth<'_>,
    ) -> Result<T, BridgeError>
    where
        T: DeserializeOwned,
        P: Serialize + Schema,
    {
        if let Some(payload) = payload {
            if let Err(errors) = payload.validate() {
                debug!("Rejected by schema: {}", errors.first_message());
                return Err(BridgeError::Validation(errors.first_message().to_string()));
            }
        }

        let token = match auth {
            Auth::None => None,
            Auth::Required(Some(token)) => Some(token.to_string()),
            Auth::Required(None) => return Err(BridgeError::AuthRequired),
        };

        let url = self.endpoint_url(endpoint);
        let mut request = self
            .client
            .request(method.clone(), &url)
            .header(CONTENT_TYPE, "application/json");

        if let Some(token) = &token {
            request = request.bearer_auth(token);
        }

        if let Some(payload) = payload {
            request = request.json(payload);
        }

        let response = request
            .send()
            .await
            .map_err(|error| BridgeError::Transport(error.to_string()))?;

        let status = response.status();
        if status.is_success() {
            response
                .json::<T>()
                .await
                .map_err(|error| BridgeError::Transport(error.to_string()))
        } else {
            let message = match response.json::<Value>().await {
                Ok(body) => remote_error_message(&body)
                    .map_or_else(|| fallback_message(&method, endpoint), ToString::to_string),
                Err(_) => fallback_message(&method, endpoint),
            };
            debug!("Remote call failed ({status}): {message}");

            Err(BridgeError::Remote { status, message })
        }
    }
}

fn remote_error_message(body: &Value) -> Option<&str> {
    body.get("error").and_then(Value::as_str)
}

fn fallback_message(method: &Method, endpoint: &str) -> String {
    format!("failed to {} {}", method.as_str().to_lowercase(), endpoint)
}
