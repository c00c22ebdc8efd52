//! Runtime application configuration loaded from the environment.

use std::time::Duration;

use anyhow::bail;
use twitch_client::{HELIX_BASE, TwitchConfig};

use super::validation::validate_setting;

/// Channel whose schedule is served.
pub const DEFAULT_CHANNEL_NAME: &str = "killthatrobot";

const DEFAULT_SERVER_HOST: &str = "0.0.0.0";
const DEFAULT_SERVER_PORT: u16 = 8080;
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;

/// Keys that must be set for the Twitch client to work.
const REQUIRED_KEYS: &[&str] = &[
    "TWITCH_GRANT_TYPE",
    "TWITCH_CLIENT_ID",
    "TWITCH_CLIENT_SECRET",
    "TWITCH_TOKEN_URL",
];

const OPTIONAL_KEYS: &[&str] = &[
    "TWITCH_API_BASE_URL",
    "TWITCH_CHANNEL_NAME",
    "REQUEST_TIMEOUT_SECS",
    "SERVER_HOST",
    "SERVER_PORT",
];

/// Runtime configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub twitch: TwitchConfig,
    pub channel_name: String,
    pub server_host: String,
    pub server_port: u16,
}

impl AppConfig {
    /// Load configuration from process environment variables.
    pub fn from_env() -> Result<Self, anyhow::Error> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup.
    ///
    /// Empty values count as unset. All missing required keys are reported
    /// together.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, anyhow::Error>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let missing: Vec<&str> = REQUIRED_KEYS
            .iter()
            .copied()
            .filter(|key| get(*key).is_none())
            .collect();
        if !missing.is_empty() {
            bail!("missing required settings: {}", missing.join(", "));
        }

        for key in REQUIRED_KEYS.iter().chain(OPTIONAL_KEYS) {
            if let Some(value) = get(*key) {
                if let Err(msg) = validate_setting(key, &value) {
                    bail!("invalid {key}: {msg}");
                }
            }
        }

        let required = |key: &str| get(key).unwrap_or_default();

        let request_timeout = get("REQUEST_TIMEOUT_SECS")
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_REQUEST_TIMEOUT_SECS);

        let twitch = TwitchConfig {
            grant_type: required("TWITCH_GRANT_TYPE"),
            client_id: required("TWITCH_CLIENT_ID"),
            client_secret: required("TWITCH_CLIENT_SECRET"),
            token_url: required("TWITCH_TOKEN_URL"),
            api_base_url: get("TWITCH_API_BASE_URL").unwrap_or_else(|| HELIX_BASE.into()),
            request_timeout: Duration::from_secs(request_timeout),
        };

        Ok(Self {
            twitch,
            channel_name: get("TWITCH_CHANNEL_NAME").unwrap_or_else(|| DEFAULT_CHANNEL_NAME.into()),
            server_host: get("SERVER_HOST").unwrap_or_else(|| DEFAULT_SERVER_HOST.into()),
            server_port: get("SERVER_PORT")
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_SERVER_PORT),
        })
    }

    /// Socket address the HTTP server binds to.
    pub fn bind_addr(&self) -> String {
        if self.server_host.contains(':') {
            format!("[{}]:{}", self.server_host, self.server_port)
        } else {
            format!("{}:{}", self.server_host, self.server_port)
        }
    }
}
