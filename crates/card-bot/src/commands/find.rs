//! Find command - searches the curated list and the catalog.

use crate::commands::CommandHandler;
use crate::error::AppResult;
use crate::messages;
use crate::render::{self, CatalogImage};
use async_trait::async_trait;
use card_catalog::{CatalogRow, CatalogStore};
use card_deck::{CuratedCard, Deck};
use regex::Regex;
use std::path::PathBuf;
use std::sync::{Arc, LazyLock};
use telegram_client::{BotMessage, Command, PhotoSource, Reply};
use tracing::{info, instrument};

static WORD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\w+").expect("valid regex"));

/// Word tokens of a query.
pub fn query_tokens(query: &str) -> Vec<String> {
    WORD.find_iter(query)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// A search hit, tagged with the source it came from.
#[derive(Debug, Clone, PartialEq)]
pub enum FindMatch {
    Curated(CuratedCard),
    Catalog(CatalogRow),
}

impl FindMatch {
    pub fn name(&self) -> &str {
        match self {
            Self::Curated(card) => &card.name,
            Self::Catalog(row) => row.name(),
        }
    }
}

pub struct FindHandler {
    deck: Arc<Deck>,
    catalog: CatalogStore,
    base_dir: PathBuf,
}

impl FindHandler {
    pub fn new(deck: Arc<Deck>, catalog: CatalogStore, base_dir: PathBuf) -> Self {
        Self {
            deck,
            catalog,
            base_dir,
        }
    }

    /// All matches, curated cards first, each source in its own order.
    pub async fn search(&self, query: &str) -> Vec<FindMatch> {
        let tokens = query_tokens(query);

        let mut matches: Vec<FindMatch> = self
            .deck
            .search(&tokens)
            .into_iter()
            .cloned()
            .map(FindMatch::Curated)
            .collect();

        matches.extend(
            self.catalog
                .search(query, &tokens)
                .await
                .into_iter()
                .map(FindMatch::Catalog),
        );

        matches
    }

    async fn render(&self, found: &FindMatch) -> Reply {
        match found {
            FindMatch::Curated(card) => Reply::photo(
                PhotoSource::from_reference(&card.image, &self.base_dir),
                render::name_caption(&card.name),
            ),
            FindMatch::Catalog(row) => match render::locate_catalog_image(row, &self.base_dir).await {
                CatalogImage::Found(path) => {
                    Reply::photo(PhotoSource::File(path), render::name_caption(row.name()))
                }
                CatalogImage::NoImageField | CatalogImage::Missing(_) => {
                    Reply::text(messages::image_unavailable(row.name()))
                }
            },
        }
    }
}

#[async_trait]
impl CommandHandler for FindHandler {
    fn name(&self) -> &str {
        "find"
    }

    #[instrument(skip_all, fields(chat_id = message.chat_id))]
    async fn execute(&self, message: &BotMessage, command: &Command) -> AppResult<Reply> {
        let query = command.args.join(" ").trim().to_lowercase();
        if query.is_empty() {
            return Ok(Reply::text(messages::FIND_USAGE));
        }

        let matches = self.search(&query).await;
        let names: Vec<&str> = matches.iter().map(FindMatch::name).collect();
        info!("/find \"{}\" -> matches: {:?}", query, names);

        match matches.first() {
            Some(first) => Ok(self.render(first).await),
            None => Ok(Reply::text(messages::NO_MATCH)),
        }
    }
}
