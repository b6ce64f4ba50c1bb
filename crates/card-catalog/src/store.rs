//! Shared catalog with whole-table reload.

use crate::error::CatalogError;
use crate::loader;
use crate::row::CatalogRow;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{info, instrument};

/// In-memory catalog backed by a file on disk.
///
/// Readers take a snapshot of the current table. A reload builds a complete
/// replacement before swapping it in, so a snapshot is never partially filled.
#[derive(Clone)]
pub struct CatalogStore {
    path: PathBuf,
    rows: Arc<RwLock<Arc<Vec<CatalogRow>>>>,
}

impl CatalogStore {
    /// Load the catalog at `path`. A missing file gives an empty catalog.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, CatalogError> {
        let path = path.into();
        let rows = loader::load(&path)?;
        Ok(Self::with_rows(path, rows))
    }

    /// Store over rows already in memory.
    pub fn with_rows(path: impl Into<PathBuf>, rows: Vec<CatalogRow>) -> Self {
        Self {
            path: path.into(),
            rows: Arc::new(RwLock::new(Arc::new(rows))),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Current table.
    pub async fn snapshot(&self) -> Arc<Vec<CatalogRow>> {
        self.rows.read().await.clone()
    }

    pub async fn len(&self) -> usize {
        self.rows.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.rows.read().await.is_empty()
    }

    /// Re-read the file and replace the table. On error the old table is kept.
    #[instrument(skip(self), fields(path = %self.path.display()))]
    pub async fn reload(&self) -> Result<usize, CatalogError> {
        let rows = loader::load_async(&self.path).await?;
        let count = rows.len();

        *self.rows.write().await = Arc::new(rows);

        info!("Catalog reloaded ({} rows)", count);
        Ok(count)
    }

    /// Rows matching a lowercased query, in file order.
    pub async fn search(&self, query: &str, tokens: &[String]) -> Vec<CatalogRow> {
        self.snapshot()
            .await
            .iter()
            .filter(|row| row.matches_query(query, tokens))
            .cloned()
            .collect()
    }
}
