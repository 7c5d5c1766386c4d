//! URL construction helpers for the Roblox web APIs.
//!
//! Pure functions, so every call builds its URL the same way.

use crate::models::RobloxConfig;
use url::Url;

/// Append `path` to the base URL's path, keeping any base prefix.
fn join_path(base: &Url, path: &str) -> Url {
    let mut url = base.clone();
    let base_path = url.path().trim_end_matches('/').to_string();
    url.set_path(&format!("{base_path}/{}", path.trim_start_matches('/')));
    url
}

/// `POST {users}/v1/usernames/users`
pub fn build_username_lookup_url(config: &RobloxConfig) -> Url {
    join_path(&config.users_base_url, "v1/usernames/users")
}

/// `GET {avatar}/v1/users/{id}/outfits`
pub fn build_user_outfits_url(config: &RobloxConfig, user_id: u64) -> Url {
    join_path(&config.avatar_base_url, &format!("v1/users/{user_id}/outfits"))
}

/// `GET {thumbnails}/v1/users/outfits?userOutfitIds=<csv>&size=..&format=..`
pub fn build_outfit_thumbnails_url(config: &RobloxConfig, outfit_ids: &[u64]) -> Url {
    let mut url = join_path(&config.thumbnails_base_url, "v1/users/outfits");

    let ids = outfit_ids
        .iter()
        .map(u64::to_string)
        .collect::<Vec<_>>()
        .join(",");

    // Commas stay literal; the API expects a plain CSV
    url.set_query(Some(&format!(
        "userOutfitIds={ids}&size={}&format={}",
        config.thumbnail_size,
        config.thumbnail_format.as_api_param()
    )));

    url
}
