//! Curated card deck with weighted rarities and flavor text.
//!
//! The deck is immutable after construction. Draws take an external
//! random source so they are reproducible under a fixed seed.

mod data;
mod deck;
mod error;
mod key;
mod rarity;
mod rng;
mod subtext;
mod types;

pub use deck::Deck;
pub use error::DeckError;
pub use key::{normalize_key, CardKey, SPECIAL_THOUSAND, SPECIAL_XX};
pub use rarity::pick_rarity;
pub use rng::DeckRng;
pub use subtext::{SubtextTable, UNKNOWN_SUBTEXT};
pub use types::*;

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use std::collections::HashMap;
    use std::io::Write;

    #[test]
    fn test_builtin_deck_is_valid() {
        let deck = Deck::builtin();
        assert!(!deck.cards().is_empty());
        assert_eq!(deck.rarities().len(), 4);
        assert!(Deck::new(
            deck.cards().to_vec(),
            deck.rarities().to_vec(),
            deck.subtexts().clone()
        )
        .is_ok());
    }

    #[test]
    fn test_builtin_rarity_weights() {
        let deck = Deck::builtin();
        let names: Vec<_> = deck.rarities().iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, ["Comune", "Ultra Rara", "Rara Ghost", "Rara Segreta"]);
        let total: f64 = deck.rarities().iter().map(|r| r.weight).sum();
        assert!((total - 1.0).abs() < 1e-9);
        assert!(deck.rarities()[0].effect.is_none());
        assert!(deck.rarities()[1].effect.is_some());
    }

    #[test]
    fn test_builtin_subtexts() {
        let deck = Deck::builtin();
        assert_ne!(deck.subtext_for("Numero iC39: Utopia Ray Infinito"), UNKNOWN_SUBTEXT);
        assert_ne!(deck.subtext_for("Numero XX: Utopia Dark Infinity"), UNKNOWN_SUBTEXT);
        assert_ne!(deck.subtext_for("Numero FS1000: Titanic Moth"), UNKNOWN_SUBTEXT);
        assert_eq!(
            deck.subtext_for("Numero 101: Cavaliere Arca Silenziosa"),
            UNKNOWN_SUBTEXT
        );
    }

    #[test]
    fn test_draw_is_reproducible() {
        let deck = Deck::builtin();
        let mut a = ChaCha8Rng::seed_from_u64(5);
        let mut b = ChaCha8Rng::seed_from_u64(5);
        for _ in 0..20 {
            assert_eq!(deck.draw(&mut a), deck.draw(&mut b));
        }
    }

    #[test]
    fn test_draw_subtext_matches_card() {
        let deck = Deck::builtin();
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        for _ in 0..50 {
            let draw = deck.draw(&mut rng).unwrap();
            assert_eq!(draw.subtext, deck.subtext_for(&draw.card.name));
            assert!(deck.rarities().contains(draw.rarity));
        }
    }

    #[test]
    fn test_search_all_tokens_must_match() {
        let deck = Deck::builtin();
        let tokens = vec!["utopia".to_string(), "ray".to_string()];
        let names: Vec<_> = deck.search(&tokens).iter().map(|c| c.name.clone()).collect();
        assert_eq!(
            names,
            ["Numero C39: Utopia Ray", "Numero iC39: Utopia Ray Infinito"]
        );
    }

    #[test]
    fn test_search_tokens_match_inside_words() {
        let deck = Deck::builtin();
        let names: Vec<_> = deck
            .search(&["topi".to_string()])
            .iter()
            .map(|c| c.name.clone())
            .collect();
        assert!(names.contains(&"Numero 39: Utopia".to_string()));
    }

    #[test]
    fn test_search_colon_becomes_space() {
        let deck = Deck::builtin();
        let found = deck.search(&["39".to_string(), "utopia".to_string()]);
        assert!(!found.is_empty());
        assert!(deck.search(&["39:".to_string()]).is_empty());
    }

    #[test]
    fn test_new_rejects_empty_and_negative() {
        let cards = vec![CuratedCard::new("Numero 1: A", "a.png")];
        let rarities = vec![RarityCategory::new("Comune", 1.0)];

        assert!(matches!(
            Deck::new(vec![], rarities.clone(), SubtextTable::default()),
            Err(DeckError::Invalid(_))
        ));
        assert!(matches!(
            Deck::new(cards.clone(), vec![], SubtextTable::default()),
            Err(DeckError::Invalid(_))
        ));
        assert!(matches!(
            Deck::new(
                cards,
                vec![RarityCategory::new("Bad", -1.0)],
                SubtextTable::default()
            ),
            Err(DeckError::Invalid(_))
        ));
    }

    #[test]
    fn test_from_json_str_overrides() {
        let json = r#"{
            "cards": [{"name": "Numero 2: Prova", "image": "https://example.com/2.png"}],
            "subtexts": ["zero", "uno", "due"],
            "special": {"XX": "ics ics"}
        }"#;

        let deck = Deck::from_json_str(json).unwrap();
        assert_eq!(deck.cards().len(), 1);
        assert_eq!(deck.rarities().len(), 4);
        assert_eq!(deck.subtext_for("Numero 2: Prova"), "due");
        assert_eq!(deck.subtext_for("Numero XX: Qualcosa"), "ics ics");
        assert_eq!(deck.subtext_for("Numero 1000: Qualcosa"), UNKNOWN_SUBTEXT);
    }

    #[test]
    fn test_special_only_file_keeps_builtin_entries() {
        let builtin = Deck::builtin();
        let deck = Deck::from_json_str(r#"{"special": {"XX": "ics"}}"#).unwrap();

        assert_eq!(deck.subtext_for("Numero XX: Qualcosa"), "ics");
        assert_eq!(deck.subtexts().len(), builtin.subtexts().len());
        assert_eq!(
            deck.subtext_for("Numero 39: Utopia"),
            builtin.subtext_for("Numero 39: Utopia")
        );
        assert_ne!(deck.subtext_for("Numero 39: Utopia"), UNKNOWN_SUBTEXT);
    }

    #[test]
    fn test_subtexts_only_file_keeps_builtin_specials() {
        let builtin = Deck::builtin();
        let deck = Deck::from_json_str(r#"{"subtexts": ["a", "b"]}"#).unwrap();

        assert_eq!(deck.subtext_for("Numero 1: Uno"), "b");
        assert_eq!(deck.subtext_for("Numero 39: Utopia"), UNKNOWN_SUBTEXT);
        assert_eq!(
            deck.subtext_for("Numero FS1000: Titanic Moth"),
            builtin.subtext_for("Numero FS1000: Titanic Moth")
        );
        assert_ne!(deck.subtext_for("Numero FS1000: Titanic Moth"), UNKNOWN_SUBTEXT);
        assert_eq!(
            deck.subtext_for("Numero XX: Qualcosa"),
            builtin.subtext_for("Numero XX: Qualcosa")
        );
    }

    #[test]
    fn test_from_json_str_defaults_to_builtin() {
        let deck = Deck::from_json_str("{}").unwrap();
        assert_eq!(deck.cards(), Deck::builtin().cards());
        assert_eq!(deck.subtexts(), Deck::builtin().subtexts());
    }

    #[test]
    fn test_from_json_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"rarities": [{{"name": "Unica", "weight": 1.0}}]}}"#
        )
        .unwrap();

        let deck = Deck::from_json_file(file.path()).unwrap();
        assert_eq!(deck.rarities().len(), 1);
        assert_eq!(deck.rarities()[0].name, "Unica");
    }

    #[test]
    fn test_from_json_file_errors() {
        assert!(matches!(
            Deck::from_json_file("/nonexistent/deck.json"),
            Err(DeckError::Io(_))
        ));
        assert!(matches!(
            Deck::from_json_str("not json"),
            Err(DeckError::Json(_))
        ));
    }

    #[test]
    fn test_custom_table_in_deck() {
        let subtexts = SubtextTable::new(
            (0..35).map(|i| i.to_string()).collect(),
            HashMap::new(),
        );
        let deck = Deck::new(
            vec![CuratedCard::new("Numero 40: Fuori", "x.png")],
            vec![RarityCategory::new("Comune", 1.0)],
            subtexts,
        )
        .unwrap();
        assert_eq!(deck.subtext_for("Numero 40: Fuori"), UNKNOWN_SUBTEXT);
    }
}
