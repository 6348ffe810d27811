use std::collections::HashMap;
use std::path::PathBuf;

use crate::constants::SOURCE_CSV;
use crate::ingestion::{FeedItem, IngestError, PriceFeed};

/// Static price source backed by a local delimited-text file.
///
/// The whole file is read on every run and every row must be well-formed.
/// Checkpoint-gated: once the file has been ingested, later runs skip it.
pub struct CsvFeed {
    path: PathBuf,
}

impl CsvFeed {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait::async_trait]
impl PriceFeed for CsvFeed {
    fn source_name(&self) -> &'static str {
        SOURCE_CSV
    }

    fn checkpoint_gated(&self) -> bool {
        true
    }

    async fn fetch(&self) -> Result<Vec<FeedItem>, IngestError> {
        let mut reader = csv::Reader::from_path(&self.path)
            .map_err(|e| IngestError::Feed(format!("{}: {}", self.path.display(), e)))?;

        let mut items = Vec::new();
        for (index, row) in reader.deserialize::<HashMap<String, String>>().enumerate() {
            let row =
                row.map_err(|e| IngestError::MalformedItem(format!("row {}: {}", index + 1, e)))?;
            let payload = serde_json::to_value(row)
                .map_err(|e| IngestError::MalformedItem(e.to_string()))?;
            items.push(FeedItem::new(payload));
        }
        Ok(items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_csv(content: &str) -> (tempfile::TempDir, PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prices.csv");
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(content.as_bytes()).unwrap();
        (dir, path)
    }

    #[tokio::test]
    async fn reads_every_row_in_order() {
        let (_dir, path) = write_csv(
            "symbol,name,price_usd\nBTC,Bitcoin,64250.50\nETH,Ethereum,3120.42\n",
        );
        let feed = CsvFeed::new(path);
        let items = feed.fetch().await.unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].payload["symbol"], "BTC");
        assert_eq!(items[1].payload["price_usd"], "3120.42");
    }

    #[tokio::test]
    async fn missing_file_is_a_feed_error() {
        let feed = CsvFeed::new("/nonexistent/prices.csv");
        assert!(matches!(feed.fetch().await, Err(IngestError::Feed(_))));
    }

    #[tokio::test]
    async fn ragged_row_is_malformed() {
        let (_dir, path) = write_csv("symbol,name,price_usd\nBTC,Bitcoin,1.0\nETH,Ethereum\n");
        let feed = CsvFeed::new(path);
        assert!(matches!(
            feed.fetch().await,
            Err(IngestError::MalformedItem(msg)) if msg.contains("row 2")
        ));
    }
}
