//! Avatar API: a user's outfit listing.

use tracing::debug;

use crate::error::RobloxResult;
use crate::http::HttpBackend;
use crate::models::{ApiList, ApiOutfit};
use crate::url::build_user_outfits_url;

use super::RobloxClient;

impl<B: HttpBackend> RobloxClient<B> {
    /// List a user's outfits, editable or not, as one page.
    pub(crate) async fn list_user_outfits(&self, user_id: u64) -> RobloxResult<Vec<ApiOutfit>> {
        let url = build_user_outfits_url(&self.config, user_id);
        let response: ApiList<ApiOutfit> = self.backend.get_json(&url).await?;
        debug!(user_id, count = response.data.len(), "listed outfits");
        Ok(response.data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::tests::{fake_outfit_json, test_config};
    use crate::http::testing::{CannedResponse, FakeBackend};
    use serde_json::json;

    #[tokio::test]
    async fn test_list_user_outfits() {
        let backend = FakeBackend::new().with_response(
            "avatar.roblox.com/v1/users/156/outfits",
            CannedResponse::ok(json!({
                "data": [
                    fake_outfit_json(1, "Knight", true),
                    fake_outfit_json(2, "Bacon Hair", false),
                ],
                "total": 2
            })),
        );
        let client = RobloxClient::with_backend(test_config(), backend.clone());

        let outfits = client.list_user_outfits(156).await.unwrap();

        assert_eq!(outfits.len(), 2);
        assert!(outfits[0].is_editable);
        assert!(!outfits[1].is_editable);
        assert_eq!(backend.requests()[0].method, "GET");
    }

    #[tokio::test]
    async fn test_list_user_outfits_malformed_body() {
        let backend = FakeBackend::new().with_response(
            "avatar.roblox.com",
            CannedResponse::ok(json!({"data": [{"name": "missing id"}]})),
        );
        let client = RobloxClient::with_backend(test_config(), backend);

        assert!(client.list_user_outfits(1).await.is_err());
    }
}
