//! Roblox API port trait.

use super::error::RobloxPortResult;
use super::types::{OutfitSummary, ThumbnailInfo, UserSummary};
use async_trait::async_trait;

/// Port trait for the Roblox web APIs used to resolve outfits.
///
/// # Design
///
/// - Uses core-owned DTOs, not Roblox wire types
/// - Returns `RobloxPortError` for every transport, status or decode failure
/// - One method per endpoint; chaining and polling belong to the resolver
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RobloxApiPort: Send + Sync {
    /// Look up a user by exact username, excluding banned users.
    ///
    /// Returns `Ok(None)` when the lookup succeeds but matches nobody.
    async fn lookup_user(&self, username: &str) -> RobloxPortResult<Option<UserSummary>>;

    /// List the outfits of a user (single page, as returned by the API).
    async fn list_outfits(&self, user_id: u64) -> RobloxPortResult<Vec<OutfitSummary>>;

    /// Fetch thumbnails for a batch of outfit IDs in one request.
    async fn outfit_thumbnails(&self, outfit_ids: &[u64]) -> RobloxPortResult<Vec<ThumbnailInfo>>;
}
