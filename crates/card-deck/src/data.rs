//! Built-in curated tables.

use crate::key::{SPECIAL_THOUSAND, SPECIAL_XX};
use crate::subtext::SubtextTable;
use crate::types::{CuratedCard, RarityCategory};
use std::collections::HashMap;

const CARDS: &[(&str, &str)] = &[
    ("Numero 1: Infezione Buzzlord", "images/numbers/001.png"),
    ("Numero 3: Mosca Cicada", "images/numbers/003.png"),
    ("Numero 7: Fortunato Straight", "images/numbers/007.png"),
    ("Numero 10: Illumiknight", "images/numbers/010.png"),
    ("Numero 12: Ninja Shadow Crimson", "images/numbers/012.png"),
    ("Numero 17: Drago Leviatano", "images/numbers/017.png"),
    ("Numero C9: Drago Stellacaos", "images/numbers/c009.png"),
    ("Numero 20: Giga-Brilliant", "images/numbers/020.png"),
    ("Numero 25: Force Focus", "images/numbers/025.png"),
    ("Numero 32: Drago Squalo", "images/numbers/032.png"),
    ("Numero C32: Drago Squalo Nero", "images/numbers/c032.png"),
    ("Numero 34: Terror-Byte", "images/numbers/034.png"),
    ("Numero 39: Utopia", "images/numbers/039.png"),
    ("Numero C39: Utopia Ray", "images/numbers/c039.png"),
    ("Numero S39: Utopia il Fulmine", "images/numbers/s039.png"),
    ("Numero iC39: Utopia Ray Infinito", "images/numbers/ic039.png"),
    ("Numero 62: Drago Fotonico Galaxy-Eyes Primo", "images/numbers/062.png"),
    ("Numero 101: Cavaliere Arca Silenziosa", "images/numbers/101.png"),
    ("Numero XX: Utopia Dark Infinity", "images/numbers/xx.png"),
    ("Numero FS1000: Titanic Moth", "images/numbers/1000.png"),
];

const SUBTEXTS: &[&str] = &[
    "Lo zero da cui tutto comincia.",
    "Il primo sciame non si ferma mai.",
    "Due volte, per sicurezza.",
    "Il canto che annuncia l'estate.",
    "Quattro lati, nessuna via d'uscita.",
    "La mano aperta conta fino a cinque.",
    "Sei facce, un solo destino.",
    "La fortuna gira sempre a sette.",
    "L'infinito in piedi.",
    "Una stella caduta dal caos.",
    "Luce che taglia le tenebre.",
    "Undici passi nel buio.",
    "L'ombra colpisce a mezzanotte.",
    "Tredici, per chi non crede alla sfortuna.",
    "Il peso della vendetta.",
    "Un ingranaggio che non perdona.",
    "Sedici fiori di ghiaccio.",
    "Il mare si apre al suo ruggito.",
    "L'eredità degli antichi.",
    "Diciannove fiamme nel vento.",
    "Un lampo di genio.",
    "La spada della giustizia fredda.",
    "Il guardiano dai mille volti.",
    "Una lancia nell'oscurità.",
    "Il drago dormiente.",
    "La lente che vede oltre.",
    "Il labirinto senza centro.",
    "Ventisette ingranaggi di guerra.",
    "Il titano silenzioso.",
    "Il martello che forgia la sorte.",
    "L'acido che scioglie ogni cosa.",
    "Il vascello dei sogni.",
    "Le fauci dell'abisso.",
    "Il cancello della conquista.",
    "Un byte di puro terrore.",
    "La bestia della notte affamata.",
    "Il giardino dei ciliegi eterni.",
    "Il signore del mare ruggente.",
    "La luce della speranza perduta.",
    "La speranza che non si spegne.",
    "Il burattinaio degli dei.",
];

const SPECIAL_XX_TEXT: &str = "Oltre ogni numero, l'oscurità infinita.";
const SPECIAL_THOUSAND_TEXT: &str = "Il millesimo, sovrano di tutti i Numeri.";

/// Built-in curated cards.
pub fn builtin_cards() -> Vec<CuratedCard> {
    CARDS
        .iter()
        .map(|(name, image)| CuratedCard::new(*name, *image))
        .collect()
}

/// The four built-in rarities.
pub fn builtin_rarities() -> Vec<RarityCategory> {
    vec![
        RarityCategory::new("Comune", 0.60),
        RarityCategory::new("Ultra Rara", 0.25).with_effect("images/effects/UltraEffect.png"),
        RarityCategory::new("Rara Ghost", 0.05).with_effect("images/effects/GhostEffect.png"),
        RarityCategory::new("Rara Segreta", 0.10).with_effect("images/effects/SecretEffect.png"),
    ]
}

/// Built-in flavor text table.
pub fn builtin_subtexts() -> SubtextTable {
    let entries = SUBTEXTS.iter().map(|s| s.to_string()).collect();
    let special = HashMap::from([
        (SPECIAL_XX.to_string(), SPECIAL_XX_TEXT.to_string()),
        (SPECIAL_THOUSAND.to_string(), SPECIAL_THOUSAND_TEXT.to_string()),
    ]);
    SubtextTable::new(entries, special)
}
