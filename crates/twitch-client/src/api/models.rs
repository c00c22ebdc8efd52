use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Wrapper for Twitch Helix list responses.
#[derive(Debug, Deserialize)]
pub struct HelixResponse<T> {
    pub data: Vec<T>,
    #[serde(default)]
    pub pagination: Option<HelixPagination>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct HelixPagination {
    #[serde(default)]
    pub cursor: Option<String>,
}

/// User information from GET /helix/users.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TwitchUser {
    pub id: String,
    pub login: String,
    pub display_name: String,
    #[serde(rename = "type", default)]
    pub user_type: String,
    #[serde(default)]
    pub broadcaster_type: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub profile_image_url: String,
    #[serde(default)]
    pub offline_image_url: String,
    #[serde(default)]
    pub view_count: u64,
    /// Only present with the `user:read:email` scope.
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub created_at: String,
}

/// Response from GET /helix/schedule.
///
/// Unlike list endpoints, `data` is a single object.
#[derive(Debug, Clone, Deserialize)]
pub struct ScheduleResponse {
    #[serde(default)]
    pub data: Option<ScheduleData>,
    #[serde(default)]
    pub pagination: Option<HelixPagination>,
}

/// A broadcaster's schedule.
///
/// The model is closed: fields Helix adds beyond these are dropped on
/// decode and never reach the JSON served to the front-end.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleData {
    #[serde(default)]
    pub segments: Vec<Segment>,
    pub broadcaster_id: String,
    pub broadcaster_name: String,
    pub broadcaster_login: String,
    #[serde(default)]
    pub vacation: Option<Vacation>,
}

impl ScheduleData {
    /// Category ids referenced by the segments, in segment order.
    ///
    /// Repeated ids keep only their first position. Segments without a
    /// category contribute nothing.
    pub fn category_ids(&self) -> Vec<String> {
        let mut ids: Vec<String> = Vec::new();
        for segment in &self.segments {
            if let Some(category) = &segment.category {
                if !ids.contains(&category.id) {
                    ids.push(category.id.clone());
                }
            }
        }
        ids
    }
}

/// One scheduled broadcast.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Segment {
    pub id: String,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub title: String,
    #[serde(default)]
    pub canceled_until: Option<DateTime<Utc>>,
    /// `null` when the broadcaster did not pick a category.
    #[serde(default)]
    pub category: Option<ScheduleCategory>,
    #[serde(default)]
    pub is_recurring: bool,
}

/// Category reference embedded in a schedule segment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleCategory {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Vacation {
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
}

/// Game/category metadata from GET /helix/games.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub name: String,
    /// Templated with `{width}` and `{height}` until sized.
    pub box_art_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub igdb_id: Option<String>,
}
