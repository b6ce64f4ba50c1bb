//! Curated deck types.

use serde::{Deserialize, Serialize};

/// A card from the curated list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CuratedCard {
    /// Display name, e.g. "Numero 39: Utopia".
    pub name: String,
    /// Image reference: an http(s) URL or a path relative to the base directory.
    pub image: String,
}

impl CuratedCard {
    pub fn new(name: impl Into<String>, image: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            image: image.into(),
        }
    }

    /// Lowercased name with `:` replaced by a space, as used for searching.
    pub fn search_text(&self) -> String {
        self.name.to_lowercase().replace(':', " ")
    }

    /// True when every token is a substring of the search text.
    pub fn matches_tokens(&self, tokens: &[String]) -> bool {
        let text = self.search_text();
        tokens.iter().all(|tok| text.contains(tok.as_str()))
    }
}

/// A named, weighted rarity bucket.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RarityCategory {
    pub name: String,
    pub weight: f64,
    /// Overlay image for the rarity. Carried as metadata only.
    #[serde(default)]
    pub effect: Option<String>,
}

impl RarityCategory {
    pub fn new(name: impl Into<String>, weight: f64) -> Self {
        Self {
            name: name.into(),
            weight,
            effect: None,
        }
    }

    pub fn with_effect(mut self, effect: impl Into<String>) -> Self {
        self.effect = Some(effect.into());
        self
    }
}

/// Result of a curated draw.
#[derive(Debug, Clone, PartialEq)]
pub struct CuratedDraw<'a> {
    pub card: &'a CuratedCard,
    pub rarity: &'a RarityCategory,
    pub subtext: &'a str,
}
