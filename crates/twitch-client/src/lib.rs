//! Twitch Helix client library.
//!
//! Provides app access token acquisition (client credentials flow),
//! typed access to the user, schedule and games endpoints, and
//! box-art URL sizing.

pub mod api;
pub mod auth;
pub mod image;

use std::fmt;
use std::time::Duration;

use reqwest::StatusCode;

/// Default Helix base URL.
pub const HELIX_BASE: &str = "https://api.twitch.tv/helix";

/// Default per-request timeout for outbound calls.
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Connection settings for the Twitch platform.
///
/// Built by the caller (usually from environment variables) and passed
/// into [`api::TwitchApiClient::new`]. The client never reads the
/// process environment itself.
#[derive(Clone)]
pub struct TwitchConfig {
    pub grant_type: String,
    pub client_id: String,
    pub client_secret: String,
    pub token_url: String,
    pub api_base_url: String,
    pub request_timeout: Duration,
}

impl TwitchConfig {
    /// Create a config pointing at the public Helix API with the default timeout.
    pub fn new(
        grant_type: impl Into<String>,
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
        token_url: impl Into<String>,
    ) -> Self {
        Self {
            grant_type: grant_type.into(),
            client_id: client_id.into(),
            client_secret: client_secret.into(),
            token_url: token_url.into(),
            api_base_url: HELIX_BASE.into(),
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
        }
    }
}

impl fmt::Debug for TwitchConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TwitchConfig")
            .field("grant_type", &self.grant_type)
            .field("client_id", &self.client_id)
            .field("client_secret", &"<redacted>")
            .field("token_url", &self.token_url)
            .field("api_base_url", &self.api_base_url)
            .field("request_timeout", &self.request_timeout)
            .finish()
    }
}

/// Unified error type for the twitch-client crate.
#[derive(Debug, thiserror::Error)]
pub enum TwitchError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("URL parse error: {0}")]
    UrlParse(#[from] url::ParseError),

    #[error("Invalid header value: {0}")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),

    /// Non-success status from the token endpoint or a Helix endpoint.
    #[error("Error fetching {context}: {status_text}")]
    ApiError {
        context: &'static str,
        status: u16,
        status_text: String,
        message: String,
    },
}

impl TwitchError {
    /// Build an [`TwitchError::ApiError`] from a failed response.
    pub(crate) fn from_status(context: &'static str, status: StatusCode, body: String) -> Self {
        Self::ApiError {
            context,
            status: status.as_u16(),
            status_text: status
                .canonical_reason()
                .unwrap_or("Unknown Status")
                .to_string(),
            message: body,
        }
    }

    /// HTTP status of the remote response, if the error came from one.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::ApiError { status, .. } => Some(*status),
            Self::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}
