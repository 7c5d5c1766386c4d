//! Core-owned DTOs for Roblox operations.
//!
//! These types cross the boundary between `rofits-roblox` and the resolver.
//! They carry only what resolution needs, not the full API payloads.

use std::fmt;

/// A user matched by the username lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserSummary {
    /// Numeric user ID
    pub id: u64,
    /// Canonical username
    pub name: String,
    /// Display name
    pub display_name: String,
}

/// One entry of a user's outfit listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutfitSummary {
    /// Outfit ID
    pub id: u64,
    /// Outfit name
    pub name: String,
    /// True for outfits the user created, false for pre-built outfits
    pub is_editable: bool,
}

/// Rendering state of a thumbnail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ThumbnailState {
    Completed,
    /// Requested but not rendered yet; asking again later resolves it.
    Pending,
    Blocked,
    Error,
    InReview,
    TemporarilyUnavailable,
    /// Any state string this client does not know about.
    Unknown,
}

impl ThumbnailState {
    /// Parse the `state` string reported by the thumbnails API.
    pub fn from_api(value: &str) -> Self {
        match value {
            "Completed" => Self::Completed,
            "Pending" => Self::Pending,
            "Blocked" => Self::Blocked,
            "Error" => Self::Error,
            "InReview" => Self::InReview,
            "TemporarilyUnavailable" => Self::TemporarilyUnavailable,
            _ => Self::Unknown,
        }
    }

    /// Whether the resolver has to ask again for this entry.
    pub const fn is_pending(self) -> bool {
        matches!(self, Self::Pending)
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Completed => "Completed",
            Self::Pending => "Pending",
            Self::Blocked => "Blocked",
            Self::Error => "Error",
            Self::InReview => "InReview",
            Self::TemporarilyUnavailable => "TemporarilyUnavailable",
            Self::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for ThumbnailState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One entry of a batch thumbnail response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThumbnailInfo {
    /// The outfit ID this thumbnail belongs to
    pub target_id: u64,
    /// Image URL, absent while pending or when blocked
    pub image_url: Option<String>,
    /// Rendering state
    pub state: ThumbnailState,
}

impl ThumbnailInfo {
    /// Create a thumbnail entry.
    pub fn new(target_id: u64, image_url: Option<String>, state: ThumbnailState) -> Self {
        Self {
            target_id,
            image_url,
            state,
        }
    }
}
