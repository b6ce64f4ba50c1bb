//! Typed catalog rows.

use crate::error::CatalogError;
use std::path::{Path, PathBuf};

/// Field delimiter of the catalog file.
pub const FIELD_DELIMITER: char = '|';

/// Suffix identifying the image field.
pub const IMAGE_SUFFIX: &str = ".png";

const NAME_FIELD: usize = 0;
const IDENTIFIER_FIELD: usize = 8;

/// One parsed line of the catalog.
///
/// Field 0 is the display name, field 8 (when present) the identifier, and
/// the first field ending in `.png` the image path relative to the base
/// directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogRow {
    fields: Vec<String>,
}

impl CatalogRow {
    /// Build a row from fields. Fails when the name field is missing or blank.
    pub fn new(fields: Vec<String>, line: usize) -> Result<Self, CatalogError> {
        match fields.get(NAME_FIELD) {
            None => Err(CatalogError::MalformedRow {
                line,
                reason: "no fields".into(),
            }),
            Some(name) if name.trim().is_empty() => Err(CatalogError::MalformedRow {
                line,
                reason: "empty name".into(),
            }),
            Some(_) => Ok(Self { fields }),
        }
    }

    /// Parse a `|`-delimited line. `line` is the 1-based line number used in errors.
    pub fn parse(text: &str, line: usize) -> Result<Self, CatalogError> {
        if text.is_empty() {
            return Self::new(Vec::new(), line);
        }
        let fields = text.split(FIELD_DELIMITER).map(String::from).collect();
        Self::new(fields, line)
    }

    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    pub fn name(&self) -> &str {
        &self.fields[NAME_FIELD]
    }

    /// Identifier column, or "" when the row is too short.
    pub fn identifier(&self) -> &str {
        self.fields
            .get(IDENTIFIER_FIELD)
            .map(String::as_str)
            .unwrap_or_default()
    }

    /// First field whose lowercase form ends in `.png`.
    pub fn image_field(&self) -> Option<&str> {
        self.fields
            .iter()
            .find(|f| f.to_lowercase().ends_with(IMAGE_SUFFIX))
            .map(String::as_str)
    }

    /// Image path resolved against `base_dir`.
    pub fn image_path(&self, base_dir: &Path) -> Option<PathBuf> {
        self.image_field().map(|f| base_dir.join(f))
    }

    /// Search match: the whole query equals the lowercased identifier, or
    /// every token is a substring of the lowercased name.
    ///
    /// `query` and `tokens` are expected to be lowercased already.
    pub fn matches_query(&self, query: &str, tokens: &[String]) -> bool {
        if query == self.identifier().to_lowercase() {
            return true;
        }
        let name = self.name().to_lowercase();
        tokens.iter().all(|tok| name.contains(tok.as_str()))
    }
}
