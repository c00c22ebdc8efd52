use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue};
use serde::Serialize;
use url::Url;

use super::*;

impl TwitchApiClient<TwitchAuth> {
    /// Create a client that fetches a client-credentials token per call.
    ///
    /// The configured timeout applies to every outbound request,
    /// token requests included.
    pub fn new(config: &TwitchConfig) -> Result<Self, TwitchError> {
        let http = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()?;
        let auth = TwitchAuth::new(config, http.clone())?;
        Self::with_token_source(http, config, auth)
    }
}

impl<A: TokenSource> TwitchApiClient<A> {
    /// Create a client backed by a custom token source.
    pub fn with_token_source(
        http: reqwest::Client,
        config: &TwitchConfig,
        auth: A,
    ) -> Result<Self, TwitchError> {
        let base_url = Url::parse(&config.api_base_url)?;
        Ok(Self {
            http,
            client_id: config.client_id.clone(),
            base_url: base_url.as_str().trim_end_matches('/').to_string(),
            auth,
        })
    }

    /// Acquire a token and build the Helix auth headers.
    pub async fn auth_headers(&self) -> Result<HeaderMap, TwitchError> {
        let token = self.auth.access_token().await?;
        let mut headers = HeaderMap::new();
        let bearer = format!("Bearer {token}");
        headers.insert(AUTHORIZATION, HeaderValue::from_str(&bearer)?);
        headers.insert("Client-Id", HeaderValue::from_str(&self.client_id)?);
        Ok(headers)
    }

    /// Execute a GET request against `{base}/{path}` with auth headers.
    ///
    /// `context` names the operation in the error raised on a
    /// non-success status.
    pub(super) async fn authenticated_get<Q>(
        &self,
        context: &'static str,
        path: &str,
        query: &Q,
    ) -> Result<String, TwitchError>
    where
        Q: Serialize + ?Sized,
    {
        let headers = self.auth_headers().await?;
        let url = format!("{}/{path}", self.base_url);
        tracing::debug!(url, "Helix GET");

        let resp = self.http.get(&url).headers(headers).query(query).send().await?;

        let status = resp.status();
        let body = resp.text().await?;

        if !status.is_success() {
            tracing::warn!(url, status = status.as_u16(), "Helix request failed");
            return Err(TwitchError::from_status(context, status, body));
        }

        Ok(body)
    }
}
