//! Catalog file loading.

use crate::error::CatalogError;
use crate::row::CatalogRow;
use std::path::Path;
use tracing::{info, instrument, warn};

/// Load every row of a `|`-delimited catalog file.
///
/// The first line is a header and is always skipped, as are empty lines.
/// Rows without a usable name are skipped with a warning. A missing file
/// yields an empty catalog.
#[instrument]
pub fn load(path: &Path) -> Result<Vec<CatalogRow>, CatalogError> {
    if !path.exists() {
        warn!("Catalog file not found: {}", path.display());
        return Ok(Vec::new());
    }

    let text = std::fs::read_to_string(path)?;
    Ok(parse_logged(&text, path))
}

/// Same as [`load`], reading through `tokio::fs` so the runtime is not blocked.
#[instrument]
pub async fn load_async(path: &Path) -> Result<Vec<CatalogRow>, CatalogError> {
    if !tokio::fs::try_exists(path).await.unwrap_or(false) {
        warn!("Catalog file not found: {}", path.display());
        return Ok(Vec::new());
    }

    let text = tokio::fs::read_to_string(path).await?;
    Ok(parse_logged(&text, path))
}

fn parse_logged(text: &str, path: &Path) -> Vec<CatalogRow> {
    let rows = parse(text);
    info!("Loaded {} catalog rows from {}", rows.len(), path.display());
    rows
}

/// Parse catalog text, skipping the header line.
pub fn parse(text: &str) -> Vec<CatalogRow> {
    text.lines()
        .enumerate()
        .skip(1)
        .filter(|(_, line)| !line.is_empty())
        .filter_map(|(idx, line)| match CatalogRow::parse(line, idx + 1) {
            Ok(row) => Some(row),
            Err(e) => {
                warn!("Skipping catalog row: {}", e);
                None
            }
        })
        .collect()
}
