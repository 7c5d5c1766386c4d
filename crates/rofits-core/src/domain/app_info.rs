//! Static application metadata shown in the info dialog.

/// Application metadata.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppInfo {
    pub name: &'static str,
    pub version: &'static str,
    pub author: &'static str,
    pub description: &'static str,
    pub repository_url: &'static str,
}

impl AppInfo {
    /// Metadata for this build.
    pub const fn current() -> Self {
        Self {
            name: "RoFits",
            version: env!("CARGO_PKG_VERSION"),
            author: "Nicky",
            description: "Its purpose is to fetch a particular Roblox user's outfits.",
            repository_url: "https://github.com/justnicky256/ro-fits",
        }
    }

    /// Dialog title, e.g. `RoFits v0.1.0`.
    pub fn title(&self) -> String {
        format!("{} v{}", self.name, self.version)
    }
}

impl Default for AppInfo {
    fn default() -> Self {
        Self::current()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_includes_version() {
        let info = AppInfo::current();
        assert_eq!(info.title(), format!("RoFits v{}", env!("CARGO_PKG_VERSION")));
        assert!(info.repository_url.starts_with("https://"));
    }
}
