//! Broadcaster schedule + category aggregation endpoint.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use serde::Serialize;

use twitch_client::TwitchError;
use twitch_client::api::{Category, ScheduleData, TwitchApiClient};
use twitch_client::auth::TokenSource;

use crate::app::SharedState;

use super::{ApiError, err_json};

/// Box-art size used by the schedule UI.
pub const BOX_ART_WIDTH: i32 = 432;
pub const BOX_ART_HEIGHT: i32 = 650;

pub const NO_BROADCASTER_FOUND: &str = "No broadcaster found";

/// Response body of GET /api/twitch-data.
#[derive(Debug, Serialize)]
pub struct TwitchData {
    #[serde(rename = "broadcasterId")]
    pub broadcaster_id: String,
    pub schedule: Option<ScheduleData>,
    pub categories: Option<Vec<Category>>,
}

/// GET /api/twitch-data
pub async fn get_twitch_data(
    State(state): State<SharedState>,
) -> Result<Json<TwitchData>, ApiError> {
    let data = aggregate(state.twitch(), state.channel_name()).await?;
    Ok(Json(data))
}

/// Resolve the channel, then attach its schedule and sized categories.
///
/// Only a failed or empty broadcaster lookup is fatal. A failed schedule
/// or category fetch leaves both `schedule` and `categories` null.
pub async fn aggregate<A: TokenSource>(
    client: &TwitchApiClient<A>,
    channel_name: &str,
) -> Result<TwitchData, ApiError> {
    let broadcaster_id = match client.get_broadcaster_id_by_name(channel_name).await {
        Ok(Some(id)) => id,
        Ok(None) => {
            tracing::warn!(channel = channel_name, "Broadcaster not found");
            return Err(err_json(StatusCode::NOT_FOUND, NO_BROADCASTER_FOUND));
        }
        Err(e) => {
            tracing::error!(
                channel = channel_name,
                status = e.status(),
                "Failed to resolve broadcaster: {e}"
            );
            return Err(err_json(StatusCode::INTERNAL_SERVER_ERROR, &e.to_string()));
        }
    };

    let (schedule, categories) = match fetch_schedule_with_categories(client, &broadcaster_id).await
    {
        Ok(Some((schedule, categories))) => (Some(schedule), Some(categories)),
        Ok(None) => (None, None),
        Err(e) => {
            tracing::error!(
                broadcaster_id = %broadcaster_id,
                status = e.status(),
                "Error fetching Twitch schedule or categories: {e}"
            );
            (None, None)
        }
    };

    Ok(TwitchData {
        broadcaster_id,
        schedule,
        categories,
    })
}

/// `Ok(None)` when the schedule response carries no data.
async fn fetch_schedule_with_categories<A: TokenSource>(
    client: &TwitchApiClient<A>,
    broadcaster_id: &str,
) -> Result<Option<(ScheduleData, Vec<Category>)>, TwitchError> {
    let Some(schedule) = client.get_schedule(broadcaster_id).await?.data else {
        return Ok(None);
    };

    let category_ids = schedule.category_ids();
    let categories = client
        .get_categories(&category_ids, BOX_ART_WIDTH, BOX_ART_HEIGHT)
        .await?;

    tracing::debug!(
        segments = schedule.segments.len(),
        categories = categories.len(),
        "Fetched schedule"
    );
    Ok(Some((schedule, categories)))
}
