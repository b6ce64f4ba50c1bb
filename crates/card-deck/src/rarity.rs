//! Weighted rarity selection.

use crate::types::RarityCategory;
use rand::Rng;

/// Pick a rarity by weighted random sampling.
///
/// Draws `r` uniformly from `[0, total)` and walks the categories in order,
/// subtracting weights until `r` falls inside one. If floating-point residue
/// leaves no category selected (or every weight is zero), the first category
/// is returned.
///
/// Returns `None` only for an empty slice.
pub fn pick_rarity<'a, R: Rng + ?Sized>(
    categories: &'a [RarityCategory],
    rng: &mut R,
) -> Option<&'a RarityCategory> {
    let first = categories.first()?;
    let total: f64 = categories.iter().map(|c| c.weight).sum();
    let mut pick = rng.gen::<f64>() * total;

    for category in categories {
        if pick < category.weight {
            return Some(category);
        }
        pick -= category.weight;
    }

    Some(first)
}
