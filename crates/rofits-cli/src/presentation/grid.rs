//! Two-column tile grid for search results.

use std::io::{self, Write};

use rofits_core::OutfitRecord;

use super::tables::{separator, truncate_string};

/// Tiles per row.
pub const COLUMNS: usize = 2;

/// Inner width of one tile.
const TILE_WIDTH: usize = 36;

/// Stand-in for a missing thumbnail.
const MISSING_THUMBNAIL: &str = "?";

/// Tile marker for a thumbnail whose link is printed under the row.
const THUMBNAIL_BELOW: &str = "[thumbnail below]";

fn tile_lines(number: usize, record: &OutfitRecord) -> [String; 5] {
    let border = format!("+{}+", separator(TILE_WIDTH + 2));
    let row = |text: &str| {
        format!(
            "| {:<width$} |",
            truncate_string(text, TILE_WIDTH),
            width = TILE_WIDTH
        )
    };
    let image = if record.has_thumbnail() {
        THUMBNAIL_BELOW
    } else {
        MISSING_THUMBNAIL
    };

    [
        border.clone(),
        row(&format!("{number}. {}", record.name)),
        row(&format!("ID {}", record.id)),
        row(image),
        border,
    ]
}

/// Render `records` as numbered tiles, [`COLUMNS`] per row, in order.
///
/// Tile numbers start at 1 and are what the shell's `copy` and `name`
/// commands take. Thumbnail links are too long for a tile, so each row is
/// followed by the full link of every tile in it that has one.
pub fn render_grid(out: &mut impl Write, records: &[OutfitRecord]) -> io::Result<()> {
    for (row, chunk) in records.chunks(COLUMNS).enumerate() {
        let tiles: Vec<[String; 5]> = chunk
            .iter()
            .enumerate()
            .map(|(col, record)| tile_lines(row * COLUMNS + col + 1, record))
            .collect();

        for line in 0..5 {
            let joined: Vec<&str> = tiles.iter().map(|tile| tile[line].as_str()).collect();
            writeln!(out, "{}", joined.join("  "))?;
        }

        for (col, record) in chunk.iter().enumerate() {
            if let Some(url) = &record.thumb_url {
                writeln!(out, "  {}. {url}", row * COLUMNS + col + 1)?;
            }
        }
    }
    Ok(())
}
