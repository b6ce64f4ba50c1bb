//! Common test utilities for integration tests.

use card_bot::commands::*;
use card_bot::mode::{DrawMode, ModeStore};
use card_catalog::{parse, CatalogStore};
use card_deck::{CuratedCard, Deck, DeckRng, RarityCategory, SubtextTable};
use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;
use telegram_client::{BotMessage, TelegramClient};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const TOKEN: &str = "42:test-token";
pub const CHAT_ID: i64 = 555;

/// Start a mock Telegram server.
pub async fn mock_telegram_server() -> MockServer {
    MockServer::start().await
}

/// Create a Telegram client configured for a mock server.
pub fn test_telegram_client(mock_server: &MockServer) -> TelegramClient {
    TelegramClient::new(mock_server.uri(), TOKEN).unwrap()
}

pub fn api_path(method_name: &str) -> String {
    format!("/bot{}/{}", TOKEN, method_name)
}

/// Successful send response.
pub fn sent() -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(serde_json::json!({
        "ok": true,
        "result": {
            "message_id": 99,
            "date": 1700000000,
            "chat": {"id": CHAT_ID, "type": "private"}
        }
    }))
}

/// Mount a send mock expecting exactly `times` calls.
pub async fn expect_calls(server: &MockServer, method_name: &str, times: u64) {
    Mock::given(method("POST"))
        .and(path(api_path(method_name)))
        .respond_with(sent())
        .expect(times)
        .mount(server)
        .await;
}

pub fn message(text: &str) -> BotMessage {
    BotMessage {
        chat_id: CHAT_ID,
        message_id: 1,
        sender: Some("duellante".into()),
        text: text.into(),
        timestamp: 1700000000,
        is_group: false,
    }
}

/// Two Utopia cards with known flavor text.
pub fn test_deck() -> Deck {
    Deck::new(
        vec![CuratedCard::new(
            "Numero 39: Utopia",
            "https://example.com/39.png",
        )],
        vec![RarityCategory::new("Rara Segreta", 1.0)],
        SubtextTable::new(
            (0..40).map(|i| format!("speranza {}", i)).collect(),
            HashMap::new(),
        ),
    )
    .unwrap()
}

/// Dispatcher wired like main.rs over the given deck, catalog text and base dir.
pub fn dispatcher(deck: Deck, catalog_text: &str, base_dir: &Path) -> Dispatcher {
    let deck = Arc::new(deck);
    let catalog = CatalogStore::with_rows(base_dir.join("cards.csv"), parse(catalog_text));
    let modes = Arc::new(ModeStore::new(DrawMode::Curated));
    let rng = Arc::new(DeckRng::seeded(3));

    let handlers: Vec<Box<dyn CommandHandler>> = vec![
        Box::new(DrawHandler::new(
            deck.clone(),
            catalog.clone(),
            modes.clone(),
            rng,
            base_dir.to_path_buf(),
        )),
        Box::new(ModeHandler::new(modes)),
        Box::new(FindHandler::new(deck, catalog.clone(), base_dir.to_path_buf())),
        Box::new(ReloadHandler::new(catalog, None)),
        Box::new(HelpHandler::new()),
    ];

    Dispatcher::new(handlers, Some("carte_bot".into()))
}
