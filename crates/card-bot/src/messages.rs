//! User-facing text.
//!
//! Every string the bot sends lives here, in Italian.

use crate::mode::DrawMode;
use std::path::Path;

pub const HELP_TEXT: &str = "Carta del giorno\n\n\
    Comandi:\n\
    /draw - Pesca una carta a caso\n\
    /mode on|off - Usa la lista dei Numeri (on) o il catalogo CSV (off)\n\
    /find <nome o ID> - Cerca una carta\n\
    /reload - Ricarica il catalogo CSV\n\
    /help - Mostra questo messaggio";

pub const EMPTY_CATALOG: &str = "Nessuna carta CSV caricata.";
pub const FIND_USAGE: &str = "Usage: /find <card name or ID>";
pub const NO_MATCH: &str = "Nessuna corrispondenza trovata.";
pub const HANDLER_FAILED: &str = "Spiacente, qualcosa è andato storto.";
pub const RELOAD_FORBIDDEN: &str = "Solo la chat di amministrazione può ricaricare il catalogo.";

pub fn image_not_found(name: &str) -> String {
    format!("{name} → immagine non trovata.")
}

pub fn missing_file(name: &str, path: &Path) -> String {
    format!("{name} → file mancante: {}", path.display())
}

pub fn image_unavailable(name: &str) -> String {
    format!("{name} (immagine non disponibile)")
}

pub fn mode_status(mode: DrawMode) -> String {
    format!(
        "Modo NUMERI è: {}. Usa /mode on|off per cambiare.",
        mode.label()
    )
}

pub fn mode_set(mode: DrawMode) -> String {
    format!("Modo NUMERI impostato: {}.", mode.label())
}

pub fn catalog_reloaded(count: usize) -> String {
    format!("Catalogo ricaricato: {count} carte.")
}

pub fn catalog_reload_failed(error: &str) -> String {
    format!("Ricarica del catalogo fallita: {error}")
}
