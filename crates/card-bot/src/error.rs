//! Application error types.

use thiserror::Error;

/// Main application error type.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(#[from] anyhow::Error),

    #[error("Telegram error: {0}")]
    Telegram(#[from] telegram_client::TelegramError),

    #[error("Catalog error: {0}")]
    Catalog(#[from] card_catalog::CatalogError),

    #[error("Deck error: {0}")]
    Deck(#[from] card_deck::DeckError),

    #[error("Deck has no cards")]
    EmptyDeck,
}

/// Result type alias for application errors.
pub type AppResult<T> = Result<T, AppError>;
