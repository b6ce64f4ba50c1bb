//! Card catalog loaded from a `|`-delimited text file.
//!
//! The catalog is read once at startup and only ever replaced as a whole.

mod error;
mod loader;
mod row;
mod store;

pub use error::CatalogError;
pub use loader::{load, load_async, parse};
pub use row::{CatalogRow, FIELD_DELIMITER, IMAGE_SUFFIX};
pub use store::CatalogStore;

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::path::Path;
    use tempfile::TempDir;

    const HEADER: &str = "name|type|attr|level|atk|def|race|set|id|image";

    fn write_catalog(dir: &TempDir, body: &str) -> std::path::PathBuf {
        let path = dir.path().join("cards.csv");
        let mut file = std::fs::File::create(&path).unwrap();
        write!(file, "{}", body).unwrap();
        path
    }

    #[test]
    fn test_parse_skips_header_and_blank_lines() {
        let text = format!("{}\nA|x\n\nB|y\n", HEADER);
        let rows = parse(&text);
        let names: Vec<_> = rows.iter().map(|r| r.name()).collect();
        assert_eq!(names, ["A", "B"]);
    }

    #[test]
    fn test_parse_header_is_skipped_unconditionally() {
        let rows = parse("Not|a|header\nA|x");
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].name(), "A");
    }

    #[test]
    fn test_parse_crlf() {
        let rows = parse("h\r\nA|a.png\r\nB|b.png\r\n");
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].image_field(), Some("a.png"));
    }

    #[test]
    fn test_parse_skips_malformed_rows() {
        let rows = parse("h\n|no name\nA|ok\n   |blank name");
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].name(), "A");
    }

    #[test]
    fn test_load_missing_file_is_empty() {
        let rows = load(Path::new("/nonexistent/dir/cards.csv")).unwrap();
        assert!(rows.is_empty());
    }

    #[test]
    fn test_load_header_only_is_empty() {
        let dir = TempDir::new().unwrap();
        let path = write_catalog(&dir, HEADER);
        assert!(load(&path).unwrap().is_empty());
    }

    #[test]
    fn test_load_preserves_file_order() {
        let dir = TempDir::new().unwrap();
        let path = write_catalog(&dir, &format!("{}\nC|1\nA|2\nB|3\n", HEADER));
        let rows = load(&path).unwrap();
        let names: Vec<_> = rows.iter().map(|r| r.name()).collect();
        assert_eq!(names, ["C", "A", "B"]);
    }

    #[test]
    fn test_load_invalid_utf8_is_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("cards.csv");
        std::fs::write(&path, [0xff, 0xfe, 0x00, b'\n']).unwrap();
        assert!(matches!(load(&path), Err(CatalogError::Io(_))));
    }

    #[tokio::test]
    async fn test_load_async_matches_load() {
        let dir = TempDir::new().unwrap();
        let path = write_catalog(&dir, &format!("{}\nC|1\n\n|bad\nA|a.png\n", HEADER));

        let rows = load_async(&path).await.unwrap();
        assert_eq!(rows, load(&path).unwrap());
        assert_eq!(rows.len(), 2);

        assert!(load_async(Path::new("/nonexistent/dir/cards.csv"))
            .await
            .unwrap()
            .is_empty());

        std::fs::write(&path, [0xff, 0xfe]).unwrap();
        assert!(matches!(load_async(&path).await, Err(CatalogError::Io(_))));
    }

    #[tokio::test(flavor = "current_thread")]
    async fn test_store_reload_interleaves_with_readers() {
        let dir = TempDir::new().unwrap();
        let path = write_catalog(&dir, &format!("{}\nA|x\n", HEADER));
        let store = CatalogStore::open(&path).unwrap();
        write_catalog(&dir, &format!("{}\nA|x\nB|y\nC|z\n", HEADER));

        let reader = store.clone();
        let (reloaded, seen) = tokio::join!(store.reload(), async move {
            let mut seen = Vec::new();
            for _ in 0..5 {
                seen.push(reader.len().await);
                tokio::task::yield_now().await;
            }
            seen
        });

        assert_eq!(reloaded.unwrap(), 3);
        // Readers see either the old or the new table, never a partial one.
        assert!(seen.iter().all(|&n| n == 1 || n == 3));
        assert_eq!(store.len().await, 3);
    }

    #[tokio::test]
    async fn test_store_open_and_snapshot() {
        let dir = TempDir::new().unwrap();
        let path = write_catalog(&dir, &format!("{}\nA|x\nB|y\n", HEADER));

        let store = CatalogStore::open(&path).unwrap();
        assert_eq!(store.len().await, 2);
        assert!(!store.is_empty().await);
        assert_eq!(store.snapshot().await[1].name(), "B");
        assert_eq!(store.path(), path.as_path());
    }

    #[tokio::test]
    async fn test_store_reload_replaces_table() {
        let dir = TempDir::new().unwrap();
        let path = write_catalog(&dir, &format!("{}\nA|x\nB|y\n", HEADER));
        let store = CatalogStore::open(&path).unwrap();
        let before = store.snapshot().await;

        write_catalog(&dir, &format!("{}\nC|z\n", HEADER));
        assert_eq!(store.reload().await.unwrap(), 1);

        let after = store.snapshot().await;
        assert_eq!(after.len(), 1);
        assert_eq!(after[0].name(), "C");
        // Old snapshots stay intact.
        assert_eq!(before.len(), 2);
    }

    #[tokio::test]
    async fn test_store_reload_is_not_additive() {
        let dir = TempDir::new().unwrap();
        let path = write_catalog(&dir, &format!("{}\nA|x\n", HEADER));
        let store = CatalogStore::open(&path).unwrap();

        store.reload().await.unwrap();
        store.reload().await.unwrap();
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn test_store_reload_error_keeps_old_table() {
        let dir = TempDir::new().unwrap();
        let path = write_catalog(&dir, &format!("{}\nA|x\n", HEADER));
        let store = CatalogStore::open(&path).unwrap();

        std::fs::write(&path, [0xff, 0xfe]).unwrap();
        assert!(store.reload().await.is_err());
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn test_store_search() {
        let rows = parse(
            "h\nDrago Bianco|a|b|c|d|e|f|g|LOB-001\nDrago Nero|a|b|c|d|e|f|g|LOB-002\nMago Nero|x",
        );
        let store = CatalogStore::with_rows("cards.csv", rows);

        let hits = store.search("nero", &["nero".into()]).await;
        let names: Vec<_> = hits.iter().map(|r| r.name()).collect();
        assert_eq!(names, ["Drago Nero", "Mago Nero"]);

        let hits = store
            .search("lob-001", &["lob".into(), "001".into()])
            .await;
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name(), "Drago Bianco");

        assert!(store.search("zzz", &["zzz".into()]).await.is_empty());
    }
}
