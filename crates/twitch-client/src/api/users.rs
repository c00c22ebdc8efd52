use super::*;

impl<A: TokenSource> TwitchApiClient<A> {
    /// Look up a user by exact login name. `None` when nobody matches.
    pub async fn get_user_by_login(&self, login: &str) -> Result<Option<TwitchUser>, TwitchError> {
        let body = self
            .authenticated_get("broadcaster info", "users", &[("login", login)])
            .await?;
        let resp: HelixResponse<TwitchUser> = serde_json::from_str(&body)?;
        Ok(resp.data.into_iter().next())
    }

    /// Resolve a channel name to its broadcaster id.
    pub async fn get_broadcaster_id_by_name(
        &self,
        channel_name: &str,
    ) -> Result<Option<String>, TwitchError> {
        let user = self.get_user_by_login(channel_name).await?;
        Ok(user.map(|u| u.id))
    }
}
