use super::*;

impl<A: TokenSource> TwitchApiClient<A> {
    /// Get the first page of a broadcaster's stream schedule.
    pub async fn get_schedule(&self, broadcaster_id: &str) -> Result<ScheduleResponse, TwitchError> {
        let body = self
            .authenticated_get("schedule", "schedule", &[("broadcaster_id", broadcaster_id)])
            .await?;
        Ok(serde_json::from_str(&body)?)
    }
}
