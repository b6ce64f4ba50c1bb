//! Card-name normalization into subtext lookup keys.

/// Prefix carried by curated "Numero" card names.
const NUMBER_PREFIX: &str = "Numero ";

/// Sentinel key for the "XX" card.
pub const SPECIAL_XX: &str = "XX";

/// Sentinel key for card 1000.
pub const SPECIAL_THOUSAND: &str = "1000";

/// Rank/attribute marker letters that may precede the number.
fn is_marker(c: char) -> bool {
    matches!(c, 'i' | 'C' | 'S' | 'F')
}

/// Derive the lookup key from a raw card name.
///
/// Takes the text before the first `:`, drops a leading `"Numero "` and then
/// any leading run of the marker letters `i`, `C`, `S`, `F`.
pub fn normalize_key(raw_name: &str) -> String {
    let title = raw_name.split(':').next().unwrap_or_default();
    let title = title.strip_prefix(NUMBER_PREFIX).unwrap_or(title);
    title.trim_start_matches(is_marker).to_string()
}

/// Classified lookup key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CardKey {
    /// Ordinary index into the subtext table.
    Index(usize),
    /// The "XX" sentinel.
    SpecialXx,
    /// Card 1000, which has its own entry outside the bulk table.
    SpecialThousand,
    /// Anything that is neither a numeral nor a sentinel.
    Unrecognized(String),
}

impl CardKey {
    /// Classify an already normalized key.
    pub fn classify(key: &str) -> Self {
        if key == SPECIAL_XX {
            return Self::SpecialXx;
        }

        if key.is_empty() || !key.chars().all(|c| c.is_ascii_digit()) {
            return Self::Unrecognized(key.to_string());
        }

        match key.parse::<usize>() {
            Ok(1000) => Self::SpecialThousand,
            Ok(idx) => Self::Index(idx),
            // Too large for any table.
            Err(_) => Self::Unrecognized(key.to_string()),
        }
    }

    /// Normalize and classify a raw card name.
    pub fn from_name(raw_name: &str) -> Self {
        Self::classify(&normalize_key(raw_name))
    }
}
