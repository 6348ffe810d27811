use reqwest::Client;
use serde_json::Value;
use std::time::Duration;

use crate::constants::{FETCH_TIMEOUT_SECS, LIVE_FEED_ITEM_CAP, SOURCE_COINPAPRIKA};
use crate::ingestion::{FeedItem, IngestError, PriceFeed};

/// Live price source backed by the CoinPaprika tickers API.
///
/// One GET with a fixed timeout; only the first [`LIVE_FEED_ITEM_CAP`]
/// items of the response are kept. The feed is not checkpoint-gated, so
/// every run re-fetches and overwrites prices - the checkpoint is
/// bookkeeping only.
pub struct CoinPaprikaFeed {
    client: Client,
    url: String,
    max_items: usize,
}

impl CoinPaprikaFeed {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            url: url.into(),
            max_items: LIVE_FEED_ITEM_CAP,
        }
    }

    fn parse_items(&self, body: &str) -> Result<Vec<FeedItem>, IngestError> {
        let values: Vec<Value> = serde_json::from_str(body)
            .map_err(|e| IngestError::Fetch(format!("unusable tickers payload: {}", e)))?;
        Ok(values
            .into_iter()
            .take(self.max_items)
            .map(FeedItem::new)
            .collect())
    }
}

#[async_trait::async_trait]
impl PriceFeed for CoinPaprikaFeed {
    fn source_name(&self) -> &'static str {
        SOURCE_COINPAPRIKA
    }

    fn checkpoint_gated(&self) -> bool {
        false
    }

    async fn fetch(&self) -> Result<Vec<FeedItem>, IngestError> {
        let response = self
            .client
            .get(&self.url)
            .timeout(Duration::from_secs(FETCH_TIMEOUT_SECS))
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(IngestError::Fetch(format!(
                "{} returned HTTP {}",
                self.url,
                response.status()
            )));
        }

        let body = response.text().await?;
        self.parse_items(&body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn ticker(symbol: &str, price: f64) -> Value {
        json!({
            "id": format!("{}-id", symbol.to_lowercase()),
            "symbol": symbol,
            "name": symbol,
            "quotes": { "USD": { "price": price } }
        })
    }

    #[tokio::test]
    async fn caps_response_at_ten_items() {
        let server = MockServer::start().await;
        let body: Vec<Value> = (0..12).map(|i| ticker(&format!("C{}", i), i as f64)).collect();
        Mock::given(method("GET"))
            .and(path("/v1/tickers"))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .mount(&server)
            .await;

        let feed = CoinPaprikaFeed::new(format!("{}/v1/tickers", server.uri()));
        let items = feed.fetch().await.unwrap();
        assert_eq!(items.len(), 10);
        assert_eq!(items[0].payload["symbol"], "C0");
        assert_eq!(items[9].payload["symbol"], "C9");
    }

    #[tokio::test]
    async fn non_success_status_is_a_fetch_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        let feed = CoinPaprikaFeed::new(server.uri());
        assert!(matches!(
            feed.fetch().await,
            Err(IngestError::Fetch(msg)) if msg.contains("503")
        ));
    }

    #[tokio::test]
    async fn malformed_body_is_a_fetch_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        let feed = CoinPaprikaFeed::new(server.uri());
        assert!(matches!(feed.fetch().await, Err(IngestError::Fetch(_))));
    }

    #[tokio::test]
    async fn connection_failure_is_a_network_error() {
        // Port 1 is never listening.
        let feed = CoinPaprikaFeed::new("http://127.0.0.1:1/v1/tickers");
        assert!(matches!(feed.fetch().await, Err(IngestError::Network(_))));
    }
}
