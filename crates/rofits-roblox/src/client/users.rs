//! Users API: username → user lookup.

use tracing::debug;

use crate::error::RobloxResult;
use crate::http::HttpBackend;
use crate::models::{ApiList, ApiUser, UsernameLookupRequest};
use crate::url::build_username_lookup_url;

use super::RobloxClient;

impl<B: HttpBackend> RobloxClient<B> {
    /// Look up one username, excluding banned users.
    ///
    /// The endpoint answers with an empty list when nobody matches.
    pub(crate) async fn lookup_username(&self, username: &str) -> RobloxResult<Option<ApiUser>> {
        let url = build_username_lookup_url(&self.config);
        let body = serde_json::to_value(UsernameLookupRequest::single(username))?;

        let response: ApiList<ApiUser> = self.backend.post_json(&url, &body).await?;
        debug!(username, matches = response.data.len(), "username lookup");

        Ok(response.data.into_iter().next())
    }
}
