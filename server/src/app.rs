use std::sync::Arc;

use twitch_client::api::TwitchApiClient;

use crate::config::AppConfig;

/// Application shared state accessible from axum handlers.
///
/// Holds only immutable data: every request performs its own token
/// acquisition and API calls.
#[derive(Clone)]
pub struct SharedState {
    inner: Arc<SharedStateInner>,
}

struct SharedStateInner {
    /// Application configuration
    config: AppConfig,
    /// Helix client built from `config.twitch`
    twitch: TwitchApiClient,
}

impl SharedState {
    /// Build the Twitch client from the loaded config.
    pub fn new(config: AppConfig) -> Result<Self, anyhow::Error> {
        let twitch = TwitchApiClient::new(&config.twitch)?;
        Ok(Self {
            inner: Arc::new(SharedStateInner { config, twitch }),
        })
    }

    pub fn config(&self) -> &AppConfig {
        &self.inner.config
    }

    pub fn twitch(&self) -> &TwitchApiClient {
        &self.inner.twitch
    }

    /// Channel whose schedule is served.
    pub fn channel_name(&self) -> &str {
        &self.inner.config.channel_name
    }
}
