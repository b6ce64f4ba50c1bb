//! The curated deck: cards, rarities and flavor text.

use crate::data;
use crate::error::DeckError;
use crate::key::CardKey;
use crate::rarity::pick_rarity;
use crate::subtext::SubtextTable;
use crate::types::{CuratedCard, CuratedDraw, RarityCategory};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use tracing::info;

/// On-disk deck file layout. Omitted sections fall back to the built-in tables.
#[derive(Debug, Deserialize)]
struct DeckFile {
    #[serde(default)]
    cards: Option<Vec<CuratedCard>>,
    #[serde(default)]
    rarities: Option<Vec<RarityCategory>>,
    #[serde(default)]
    subtexts: Option<Vec<String>>,
    #[serde(default)]
    special: Option<HashMap<String, String>>,
}

/// Immutable curated deck, shared by every handler.
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<CuratedCard>,
    rarities: Vec<RarityCategory>,
    subtexts: SubtextTable,
}

impl Deck {
    /// Build a deck from parts.
    pub fn new(
        cards: Vec<CuratedCard>,
        rarities: Vec<RarityCategory>,
        subtexts: SubtextTable,
    ) -> Result<Self, DeckError> {
        if cards.is_empty() {
            return Err(DeckError::Invalid("deck has no cards".into()));
        }
        if rarities.is_empty() {
            return Err(DeckError::Invalid("deck has no rarities".into()));
        }
        if let Some(bad) = rarities.iter().find(|r| r.weight.is_nan() || r.weight < 0.0) {
            return Err(DeckError::Invalid(format!(
                "rarity '{}' has invalid weight {}",
                bad.name, bad.weight
            )));
        }

        Ok(Self {
            cards,
            rarities,
            subtexts,
        })
    }

    /// The built-in deck.
    pub fn builtin() -> Self {
        Self {
            cards: data::builtin_cards(),
            rarities: data::builtin_rarities(),
            subtexts: data::builtin_subtexts(),
        }
    }

    /// Load a deck from a JSON file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, DeckError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        let deck = Self::from_json_str(&text)?;
        info!(
            "Loaded deck from {} ({} cards, {} subtexts)",
            path.display(),
            deck.cards.len(),
            deck.subtexts.len()
        );
        Ok(deck)
    }

    /// Parse a deck from JSON text.
    pub fn from_json_str(text: &str) -> Result<Self, DeckError> {
        let file: DeckFile = serde_json::from_str(text)?;
        let subtexts = data::builtin_subtexts().with_overrides(file.subtexts, file.special);

        Self::new(
            file.cards.unwrap_or_else(data::builtin_cards),
            file.rarities.unwrap_or_else(data::builtin_rarities),
            subtexts,
        )
    }

    pub fn cards(&self) -> &[CuratedCard] {
        &self.cards
    }

    pub fn rarities(&self) -> &[RarityCategory] {
        &self.rarities
    }

    pub fn subtexts(&self) -> &SubtextTable {
        &self.subtexts
    }

    /// Flavor text for a card name.
    pub fn subtext_for(&self, name: &str) -> &str {
        self.subtexts.resolve(&CardKey::from_name(name))
    }

    /// Draw a uniformly random card with a weighted rarity and its flavor text.
    pub fn draw<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<CuratedDraw<'_>> {
        let card = self.cards.choose(rng)?;
        let rarity = pick_rarity(&self.rarities, rng)?;

        Some(CuratedDraw {
            card,
            rarity,
            subtext: self.subtext_for(&card.name),
        })
    }

    /// Cards whose name contains every token, in deck order.
    pub fn search(&self, tokens: &[String]) -> Vec<&CuratedCard> {
        self.cards
            .iter()
            .filter(|card| card.matches_tokens(tokens))
            .collect()
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::builtin()
    }
}
