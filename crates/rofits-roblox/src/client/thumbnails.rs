//! Thumbnails API: batch outfit thumbnails.

use tracing::debug;

use crate::error::RobloxResult;
use crate::http::HttpBackend;
use crate::models::{ApiList, ApiThumbnail};
use crate::url::build_outfit_thumbnails_url;

use super::RobloxClient;

impl<B: HttpBackend> RobloxClient<B> {
    /// Fetch thumbnails for all `outfit_ids` in a single request.
    ///
    /// An empty batch short-circuits without a request.
    pub(crate) async fn batch_outfit_thumbnails(
        &self,
        outfit_ids: &[u64],
    ) -> RobloxResult<Vec<ApiThumbnail>> {
        if outfit_ids.is_empty() {
            return Ok(Vec::new());
        }

        let url = build_outfit_thumbnails_url(&self.config, outfit_ids);
        let response: ApiList<ApiThumbnail> = self.backend.get_json(&url).await?;
        debug!(
            requested = outfit_ids.len(),
            returned = response.data.len(),
            "fetched outfit thumbnails"
        );
        Ok(response.data)
    }
}
