//! App access token acquisition for Twitch.
//!
//! Tokens are fetched with the client credentials grant. [`TwitchAuth`]
//! requests a fresh token every time it is asked; a caching strategy can
//! be added by implementing [`TokenSource`] on another type.

use std::future::Future;

use serde::Deserialize;
use url::Url;

use crate::{TwitchConfig, TwitchError};

/// Token endpoint response.
#[derive(Debug, Clone, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    #[serde(default)]
    pub expires_in: i64,
    #[serde(default)]
    pub token_type: String,
}

/// Something that can hand out a bearer token for Helix requests.
pub trait TokenSource {
    /// Return an access token valid for at least one request.
    fn access_token(&self) -> impl Future<Output = Result<String, TwitchError>> + Send;
}

/// Client credentials token fetcher.
#[derive(Clone)]
pub struct TwitchAuth {
    grant_type: String,
    client_id: String,
    client_secret: String,
    token_url: Url,
    http: reqwest::Client,
}

impl TwitchAuth {
    /// Create a token fetcher sharing the given HTTP client.
    pub fn new(config: &TwitchConfig, http: reqwest::Client) -> Result<Self, TwitchError> {
        Ok(Self {
            grant_type: config.grant_type.clone(),
            client_id: config.client_id.clone(),
            client_secret: config.client_secret.clone(),
            token_url: Url::parse(&config.token_url)?,
            http,
        })
    }

    /// POST the form-encoded credentials to the token endpoint.
    pub async fn fetch_app_token(&self) -> Result<TokenResponse, TwitchError> {
        let params = [
            ("grant_type", self.grant_type.as_str()),
            ("client_id", self.client_id.as_str()),
            ("client_secret", self.client_secret.as_str()),
        ];

        tracing::debug!(token_url = %self.token_url, "Requesting Twitch app access token");

        let resp = self
            .http
            .post(self.token_url.clone())
            .form(&params)
            .send()
            .await?;

        let status = resp.status();
        let body = resp.text().await?;

        if !status.is_success() {
            tracing::warn!(status = status.as_u16(), "Token request rejected");
            return Err(TwitchError::from_status("access token", status, body));
        }

        let token: TokenResponse = serde_json::from_str(&body)?;
        tracing::debug!(expires_in = token.expires_in, "Received app access token");
        Ok(token)
    }
}

impl TokenSource for TwitchAuth {
    async fn access_token(&self) -> Result<String, TwitchError> {
        Ok(self.fetch_app_token().await?.access_token)
    }
}

/// A fixed token, for callers that already hold one.
#[derive(Debug, Clone)]
pub struct StaticToken(pub String);

impl TokenSource for StaticToken {
    async fn access_token(&self) -> Result<String, TwitchError> {
        Ok(self.0.clone())
    }
}
