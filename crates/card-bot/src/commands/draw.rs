//! Draw command - sends a random card.

use crate::commands::CommandHandler;
use crate::error::{AppError, AppResult};
use crate::messages;
use crate::mode::{DrawMode, ModeStore};
use crate::render::{self, CatalogImage};
use async_trait::async_trait;
use card_catalog::CatalogStore;
use card_deck::{Deck, DeckRng};
use rand::seq::SliceRandom;
use std::path::PathBuf;
use std::sync::Arc;
use telegram_client::{BotMessage, Command, PhotoSource, Reply};
use tracing::{debug, instrument};

pub struct DrawHandler {
    deck: Arc<Deck>,
    catalog: CatalogStore,
    modes: Arc<ModeStore>,
    rng: Arc<DeckRng>,
    base_dir: PathBuf,
}

impl DrawHandler {
    pub fn new(
        deck: Arc<Deck>,
        catalog: CatalogStore,
        modes: Arc<ModeStore>,
        rng: Arc<DeckRng>,
        base_dir: PathBuf,
    ) -> Self {
        Self {
            deck,
            catalog,
            modes,
            rng,
            base_dir,
        }
    }

    /// Random curated card with rarity and flavor text.
    fn draw_curated(&self) -> AppResult<Reply> {
        let draw = self
            .rng
            .with(|rng| self.deck.draw(rng))
            .ok_or(AppError::EmptyDeck)?;

        debug!("Drew {} ({})", draw.card.name, draw.rarity.name);

        Ok(Reply::photo(
            PhotoSource::from_reference(&draw.card.image, &self.base_dir),
            render::curated_draw_caption(&draw),
        ))
    }

    /// Random catalog row, sent only if its image exists on disk.
    async fn draw_catalog(&self) -> Reply {
        let rows = self.catalog.snapshot().await;
        let Some(row) = self.rng.with(|rng| rows.choose(rng).cloned()) else {
            return Reply::text(messages::EMPTY_CATALOG);
        };

        debug!("Drew catalog row {}", row.name());

        match render::locate_catalog_image(&row, &self.base_dir).await {
            CatalogImage::Found(path) => {
                Reply::photo(PhotoSource::File(path), render::name_caption(row.name()))
            }
            CatalogImage::NoImageField => Reply::text(messages::image_not_found(row.name())),
            CatalogImage::Missing(path) => {
                Reply::text(messages::missing_file(row.name(), &path))
            }
        }
    }
}

#[async_trait]
impl CommandHandler for DrawHandler {
    fn name(&self) -> &str {
        "draw"
    }

    #[instrument(skip_all, fields(chat_id = message.chat_id))]
    async fn execute(&self, message: &BotMessage, _command: &Command) -> AppResult<Reply> {
        match self.modes.get(message.chat_id).await {
            DrawMode::Curated => self.draw_curated(),
            DrawMode::Catalog => Ok(self.draw_catalog().await),
        }
    }
}
