//! HTTP backend abstraction for the Roblox web APIs.
//!
//! This module provides a trait-based HTTP backend that allows for
//! dependency injection and easy testing. The production implementation
//! uses reqwest and issues every request exactly once.

use crate::error::{RobloxError, RobloxResult};
use crate::models::RobloxConfig;
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use tracing::{debug, error};
use url::Url;

/// Longest slice of a failed response body that gets logged.
const ERROR_BODY_LOG_LIMIT: usize = 512;

// ============================================================================
// HTTP Backend Trait
// ============================================================================

/// Trait for HTTP backends that exchange JSON with the Roblox APIs.
///
/// This is an implementation detail - external code should use the
/// `RobloxApiPort` trait.
#[async_trait]
pub trait HttpBackend: Send + Sync {
    /// GET a URL and deserialize the JSON response.
    async fn get_json<T: DeserializeOwned + Send>(&self, url: &Url) -> RobloxResult<T>;

    /// POST a JSON body to a URL and deserialize the JSON response.
    async fn post_json<T: DeserializeOwned + Send>(
        &self,
        url: &Url,
        body: &serde_json::Value,
    ) -> RobloxResult<T>;
}

// ============================================================================
// Reqwest Backend
// ============================================================================

/// Production HTTP backend using reqwest.
///
/// No retries: a failed call is reported to the caller as-is.
pub struct ReqwestBackend {
    client: reqwest::Client,
}

impl ReqwestBackend {
    /// Create a new reqwest backend with the given configuration.
    pub fn new(config: &RobloxConfig) -> RobloxResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.as_str())
            .build()?;

        Ok(Self { client })
    }

    /// Send a request, turning non-success statuses into errors.
    async fn execute<T: DeserializeOwned + Send>(
        &self,
        request: reqwest::RequestBuilder,
        url: &Url,
    ) -> RobloxResult<T> {
        let response = request.send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!(
                status = status.as_u16(),
                url = %url,
                body = truncate_body(&body),
                "Roblox API request failed"
            );
            return Err(RobloxError::ApiRequestFailed {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let bytes = response.bytes().await?;
        debug!(status = status.as_u16(), url = %url, len = bytes.len(), "Roblox API response");
        serde_json::from_slice(&bytes).map_err(Into::into)
    }
}

/// Cut a body down for logging, on a char boundary.
fn truncate_body(body: &str) -> &str {
    if body.len() <= ERROR_BODY_LOG_LIMIT {
        return body;
    }
    let mut end = ERROR_BODY_LOG_LIMIT;
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    &body[..end]
}

#[async_trait]
impl HttpBackend for ReqwestBackend {
    async fn get_json<T: DeserializeOwned + Send>(&self, url: &Url) -> RobloxResult<T> {
        self.execute(self.client.get(url.as_str()), url).await
    }

    async fn post_json<T: DeserializeOwned + Send>(
        &self,
        url: &Url,
        body: &serde_json::Value,
    ) -> RobloxResult<T> {
        self.execute(self.client.post(url.as_str()).json(body), url)
            .await
    }
}

// ============================================================================
// Fake Backend for Testing
// ============================================================================


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_body_short_is_untouched() {
        assert_eq!(truncate_body("{\"errors\":[]}"), "{\"errors\":[]}");
    }

    #[test]
    fn test_truncate_body_respects_char_boundaries() {
        let body = "é".repeat(ERROR_BODY_LOG_LIMIT);
        let cut = truncate_body(&body);
        assert!(cut.len() <= ERROR_BODY_LOG_LIMIT);
        assert!(cut.chars().all(|c| c == 'é'));
    }

    #[test]
    fn test_reqwest_backend_creation() {
        let config = RobloxConfig::default();
        assert!(ReqwestBackend::new(&config).is_ok());
    }

    mod fake_backend_tests {
        use super::super::testing::*;
        use super::*;
        use serde_json::json;
        use tokio_test::{assert_err, assert_ok};

        #[tokio::test]
        async fn test_fake_backend_returns_canned_response() {
            let backend = FakeBackend::new()
                .with_response("outfits", CannedResponse::ok(json!({"data": [1, 2]})));

            let url = Url::parse("https://avatar.example/v1/users/1/outfits").unwrap();
            let result: serde_json::Value = assert_ok!(backend.get_json(&url).await);

            assert_eq!(result["data"][1], 2);
            assert_eq!(backend.count("outfits"), 1);
        }

        #[tokio::test]
        async fn test_fake_backend_returns_404_for_unknown_url() {
            let backend = FakeBackend::new();
            let url = Url::parse("https://example.com/unknown").unwrap();

            let result: RobloxResult<serde_json::Value> = backend.get_json(&url).await;
            assert!(matches!(
                result,
                Err(RobloxError::ApiRequestFailed { status: 404, .. })
            ));
        }

        #[tokio::test]
        async fn test_fake_backend_sequence_repeats_last() {
            let backend = FakeBackend::new().with_sequence(
                "thumbs",
                vec![
                    CannedResponse::ok(json!({"n": 1})),
                    CannedResponse::ok(json!({"n": 2})),
                ],
            );
            let url = Url::parse("https://example.com/thumbs").unwrap();

            let mut seen = Vec::new();
            for _ in 0..3 {
                let value: serde_json::Value = assert_ok!(backend.get_json(&url).await);
                seen.push(value["n"].as_u64().unwrap());
            }
            assert_eq!(seen, vec![1, 2, 2]);
        }

        #[tokio::test]
        async fn test_fake_backend_records_post_body() {
            let backend = FakeBackend::new()
                .with_response("users", CannedResponse::status(500));
            let url = Url::parse("https://example.com/users").unwrap();

            let result: RobloxResult<serde_json::Value> =
                backend.post_json(&url, &json!({"usernames": ["a"]})).await;
            assert_err!(result);

            let requests = backend.requests();
            assert_eq!(requests.len(), 1);
            assert_eq!(requests[0].method, "POST");
            assert_eq!(requests[0].body, Some(json!({"usernames": ["a"]})));
        }
    }
}
