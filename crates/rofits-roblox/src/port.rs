//! Port trait implementation for `RobloxClient`.
//!
//! This module implements the core-owned `RobloxApiPort` trait for
//! `RobloxClient`, handling the conversion between Roblox wire types and
//! core DTOs.

use async_trait::async_trait;
use rofits_core::ports::{
    OutfitSummary, RobloxApiPort, RobloxPortError, RobloxPortResult, ThumbnailInfo,
    ThumbnailState, UserSummary,
};

use crate::client::RobloxClient;
use crate::error::RobloxError;
use crate::http::HttpBackend;
use crate::models::{ApiOutfit, ApiThumbnail, ApiUser};

// ============================================================================
// Error Mapping
// ============================================================================

/// Convert internal `RobloxError` to core `RobloxPortError`.
fn map_error(err: RobloxError) -> RobloxPortError {
    match err {
        RobloxError::ApiRequestFailed { status, url } => RobloxPortError::Status {
            status,
            endpoint: strip_query(&url).to_string(),
        },
        RobloxError::Network(e) if e.is_decode() => RobloxPortError::InvalidResponse {
            message: e.to_string(),
        },
        RobloxError::Network(e) => RobloxPortError::Network {
            message: e.to_string(),
        },
        RobloxError::InvalidUrl(e) => RobloxPortError::Configuration {
            message: e.to_string(),
        },
        RobloxError::JsonParse(e) => RobloxPortError::InvalidResponse {
            message: e.to_string(),
        },
    }
}

/// Drop the query string so errors name the endpoint, not the batch.
fn strip_query(url: &str) -> &str {
    url.split_once('?').map_or(url, |(endpoint, _)| endpoint)
}

// ============================================================================
// Type Conversions
// ============================================================================

fn to_user_summary(user: ApiUser) -> UserSummary {
    UserSummary {
        id: user.id,
        name: user.name,
        display_name: user.display_name,
    }
}

fn to_outfit_summary(outfit: ApiOutfit) -> OutfitSummary {
    OutfitSummary {
        id: outfit.id,
        name: outfit.name,
        is_editable: outfit.is_editable,
    }
}

fn to_thumbnail_info(thumb: ApiThumbnail) -> ThumbnailInfo {
    ThumbnailInfo {
        target_id: thumb.target_id,
        // Blocked entries come back with an empty string
        image_url: thumb.image_url.filter(|url| !url.is_empty()),
        state: ThumbnailState::from_api(&thumb.state),
    }
}

// ============================================================================
// Port Implementation
// ============================================================================

#[async_trait]
impl<B: HttpBackend + Send + Sync> RobloxApiPort for RobloxClient<B> {
    async fn lookup_user(&self, username: &str) -> RobloxPortResult<Option<UserSummary>> {
        let user = self.lookup_username(username).await.map_err(map_error)?;
        Ok(user.map(to_user_summary))
    }

    async fn list_outfits(&self, user_id: u64) -> RobloxPortResult<Vec<OutfitSummary>> {
        let outfits = self.list_user_outfits(user_id).await.map_err(map_error)?;
        Ok(outfits.into_iter().map(to_outfit_summary).collect())
    }

    async fn outfit_thumbnails(&self, outfit_ids: &[u64]) -> RobloxPortResult<Vec<ThumbnailInfo>> {
        let thumbs = self
            .batch_outfit_thumbnails(outfit_ids)
            .await
            .map_err(map_error)?;
        Ok(thumbs.into_iter().map(to_thumbnail_info).collect())
    }
}
