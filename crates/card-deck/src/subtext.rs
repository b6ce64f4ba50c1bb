//! Flavor text lookup.

use crate::key::{CardKey, SPECIAL_THOUSAND, SPECIAL_XX};
use std::collections::HashMap;

/// Placeholder returned when no flavor text is known.
pub const UNKNOWN_SUBTEXT: &str = "???";

/// Flavor text indexed by card number, plus sentinel overrides.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SubtextTable {
    entries: Vec<String>,
    special: HashMap<String, String>,
}

impl SubtextTable {
    pub fn new(entries: Vec<String>, special: HashMap<String, String>) -> Self {
        Self { entries, special }
    }

    /// Replace the bulk entries and/or the sentinel map, keeping whichever is `None`.
    pub fn with_overrides(
        self,
        entries: Option<Vec<String>>,
        special: Option<HashMap<String, String>>,
    ) -> Self {
        Self {
            entries: entries.unwrap_or(self.entries),
            special: special.unwrap_or(self.special),
        }
    }

    /// Number of indexable entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn special_or_unknown(&self, key: &str) -> &str {
        self.special
            .get(key)
            .map(String::as_str)
            .unwrap_or(UNKNOWN_SUBTEXT)
    }

    /// Resolve a classified key to flavor text.
    pub fn resolve(&self, key: &CardKey) -> &str {
        match key {
            CardKey::SpecialXx => self.special_or_unknown(SPECIAL_XX),
            CardKey::SpecialThousand => self.special_or_unknown(SPECIAL_THOUSAND),
            CardKey::Index(idx) => self
                .entries
                .get(*idx)
                .map(String::as_str)
                .unwrap_or(UNKNOWN_SUBTEXT),
            CardKey::Unrecognized(_) => UNKNOWN_SUBTEXT,
        }
    }

    /// Resolve a normalized key string to flavor text.
    pub fn resolve_subtext(&self, key: &str) -> &str {
        self.resolve(&CardKey::classify(key))
    }
}
