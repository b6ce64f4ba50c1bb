//! Card bot - main entry point.

use anyhow::Context;
use card_bot::commands::*;
use card_bot::config::Config;
use card_bot::error::AppResult;
use card_bot::mode::ModeStore;
use card_catalog::CatalogStore;
use card_deck::{Deck, DeckRng};
use std::sync::Arc;
use telegram_client::{TelegramClient, UpdateReceiver};
use tokio::signal;
use tokio_stream::StreamExt;
use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> AppResult<()> {
    // Load configuration
    let config = Config::load().context("Failed to load configuration")?;

    // Initialize logging
    init_logging(&config.bot.log_level);

    info!("Starting card bot...");

    let base_dir = config.cards.base_dir();
    info!("Base directory: {}", base_dir.display());

    // Curated deck
    let deck = Arc::new(match &config.deck.path {
        Some(path) => Deck::from_json_file(path)?,
        None => Deck::builtin(),
    });
    info!(
        "Curated deck ready ({} cards, {} subtexts)",
        deck.cards().len(),
        deck.subtexts().len()
    );

    // Catalog
    let catalog_path = config.cards.catalog_path();
    let catalog = match CatalogStore::open(&catalog_path) {
        Ok(catalog) => catalog,
        Err(e) => {
            error!("Failed to load catalog {}: {}", catalog_path.display(), e);
            CatalogStore::with_rows(catalog_path, Vec::new())
        }
    };
    info!("Catalog rows: {}", catalog.len().await);

    let rng = Arc::new(DeckRng::from_seed_option(config.deck.seed));
    if config.deck.seed.is_some() {
        warn!("Using a fixed RNG seed - draws are reproducible");
    }

    let modes = Arc::new(ModeStore::new(config.bot.default_mode));

    if config.bot.admin_chat.is_none() {
        warn!("No admin chat configured - /reload is open to every chat");
    }

    let telegram = TelegramClient::new(&config.telegram.api_url, &config.telegram.bot_token)
        .context("Failed to create Telegram client")?;

    let me = match telegram.get_me().await {
        Ok(me) => me,
        Err(e) => {
            error!("Telegram API not reachable at {}: {}", config.telegram.api_url, e);
            return Err(e.into());
        }
    };
    info!(
        "Telegram API healthy - bot @{}",
        me.username.as_deref().unwrap_or(&me.first_name)
    );

    // Create command handlers
    let handlers: Vec<Box<dyn CommandHandler>> = vec![
        Box::new(DrawHandler::new(
            deck.clone(),
            catalog.clone(),
            modes.clone(),
            rng.clone(),
            base_dir.clone(),
        )),
        Box::new(ModeHandler::new(modes.clone())),
        Box::new(FindHandler::new(deck.clone(), catalog.clone(), base_dir.clone())),
        Box::new(ReloadHandler::new(catalog.clone(), config.bot.admin_chat)),
        Box::new(HelpHandler::new()),
    ];

    let dispatcher = Dispatcher::new(handlers, me.username.clone());

    info!("Registered {} command handlers", dispatcher.handler_count());
    info!("Listening for messages...");

    // Start update receiver
    let receiver = UpdateReceiver::new(telegram.clone(), config.telegram.poll_timeout);
    let mut stream = Box::pin(receiver.stream());

    // Main message loop
    loop {
        tokio::select! {
            Some(message) = stream.next() => {
                if let Some(reply) = dispatcher.handle(&message).await {
                    if let Err(e) = telegram.reply(&message, &reply).await {
                        error!("Failed to send reply: {}", e);
                    }
                }
            }
            _ = signal::ctrl_c() => {
                info!("Shutdown signal received");
                break;
            }
        }
    }

    info!("Shutting down...");
    Ok(())
}

fn init_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}
