//! Caption formatting and catalog image lookup.

use card_catalog::CatalogRow;
use card_deck::CuratedDraw;
use std::path::{Path, PathBuf};

/// Escape text for inclusion in an HTML caption.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#x27;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Bold card name.
pub fn name_caption(name: &str) -> String {
    format!("<b>{}</b>", escape_html(name))
}

/// Caption for a curated draw: name, rarity and italic flavor text.
pub fn curated_draw_caption(draw: &CuratedDraw<'_>) -> String {
    format!(
        "<b>{}</b> 🎉\nRarità: {}\n\n<i>{}</i>",
        escape_html(&draw.card.name),
        escape_html(&draw.rarity.name),
        escape_html(draw.subtext)
    )
}

/// Outcome of resolving a catalog row's image on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogImage {
    Found(PathBuf),
    NoImageField,
    Missing(PathBuf),
}

/// Find the row's `.png` field and check that it exists under `base_dir`.
pub async fn locate_catalog_image(row: &CatalogRow, base_dir: &Path) -> CatalogImage {
    let Some(path) = row.image_path(base_dir) else {
        return CatalogImage::NoImageField;
    };

    if tokio::fs::try_exists(&path).await.unwrap_or(false) {
        CatalogImage::Found(path)
    } else {
        CatalogImage::Missing(path)
    }
}
