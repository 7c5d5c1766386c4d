//! The outfit record presented to the user.

use serde::{Deserialize, Serialize};

/// A resolved outfit, ready to be rendered as a tile.
///
/// Built by joining an editable outfit's name with its thumbnail URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutfitRecord {
    /// Outfit ID (what a tap copies)
    pub id: u64,
    /// Outfit name as listed by the avatar API
    pub name: String,
    /// Rendered thumbnail, absent when the upstream never produced one
    pub thumb_url: Option<String>,
}

impl OutfitRecord {
    /// Create a new record.
    pub fn new(id: u64, name: impl Into<String>, thumb_url: Option<String>) -> Self {
        Self {
            id,
            name: name.into(),
            thumb_url,
        }
    }

    /// Whether a thumbnail image is available for this outfit.
    pub const fn has_thumbnail(&self) -> bool {
        self.thumb_url.is_some()
    }
}
