//! The info dialog.

use std::io::{self, Write};

use rofits_core::AppInfo;

/// Render the info dialog: title with version, a description naming the
/// author, and the repository link.
pub fn render_info(out: &mut impl Write, info: &AppInfo) -> io::Result<()> {
    let title = info.title();
    writeln!(out, "+-- {title} --+")?;
    writeln!(
        out,
        "This is a sample application created by {}. {}",
        info.author, info.description
    )?;
    writeln!(out)?;
    writeln!(out, "You can check out its repository here:")?;
    writeln!(out, "{}", info.repository_url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_info() {
        let info = AppInfo::current();
        let mut buf = Vec::new();
        render_info(&mut buf, &info).unwrap();
        let out = String::from_utf8(buf).unwrap();

        assert!(out.starts_with(&format!("+-- RoFits v{} --+", env!("CARGO_PKG_VERSION"))));
        assert!(out.contains("created by Nicky."));
        assert!(out.contains("https://github.com/justnicky256/ro-fits"));
    }
}
