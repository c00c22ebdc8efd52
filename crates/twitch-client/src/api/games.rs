use crate::image::replace_image_size;

use super::*;

impl<A: TokenSource> TwitchApiClient<A> {
    /// Get categories by id with box art sized to `width` x `height`.
    ///
    /// An empty id list returns an empty list without a request. Ids past
    /// [`MAX_IDS_PER_REQUEST`] are dropped.
    pub async fn get_categories(
        &self,
        category_ids: &[String],
        width: i32,
        height: i32,
    ) -> Result<Vec<Category>, TwitchError> {
        if category_ids.is_empty() {
            return Ok(Vec::new());
        }

        if category_ids.len() > MAX_IDS_PER_REQUEST {
            tracing::warn!(
                requested = category_ids.len(),
                limit = MAX_IDS_PER_REQUEST,
                "Too many category ids, extra ids dropped"
            );
        }

        let query = build_games_query(category_ids);
        let body = self.authenticated_get("games", "games", &query).await?;
        let resp: HelixResponse<Category> = serde_json::from_str(&body)?;

        Ok(resp
            .data
            .into_iter()
            .map(|mut category| {
                category.box_art_url = replace_image_size(&category.box_art_url, width, height);
                category
            })
            .collect())
    }
}

pub(super) fn build_games_query(category_ids: &[String]) -> Vec<(&'static str, &str)> {
    category_ids
        .iter()
        .take(MAX_IDS_PER_REQUEST)
        .map(|id| ("id", id.as_str()))
        .collect()
}
