use chrono::Utc;
use std::sync::Arc;

use super::ingestion_model::{RunOutcome, RunSummary};
use super::ingestion_traits::{IngestionServiceTrait, IngestionStore, PriceFeed};
use crate::errors::Result;

/// Orchestrates the per-source ingestion pipeline.
///
/// The service owns no storage detail: the gate reads a checkpoint through
/// the store, the fetch happens outside any transaction, and the whole
/// write phase is a single [`IngestionStore::ingest_run`] call.
pub struct IngestionService {
    store: Arc<dyn IngestionStore>,
    feeds: Vec<Arc<dyn PriceFeed>>,
}

impl IngestionService {
    pub fn new(store: Arc<dyn IngestionStore>, feeds: Vec<Arc<dyn PriceFeed>>) -> Self {
        Self { store, feeds }
    }

    /// Runs the pipeline for one source.
    ///
    /// States, in order: gate (checkpoint-gated sources with an existing
    /// checkpoint terminate without side effects), fetch, transactional
    /// write, checkpoint commit. Every failure is logged and re-raised.
    pub async fn run_feed(&self, feed: &dyn PriceFeed) -> Result<RunSummary> {
        let source = feed.source_name();

        if feed.checkpoint_gated() {
            if let Some(checkpoint) = self.store.get_checkpoint(source)? {
                log::info!(
                    "{} already ingested at {}, skipping",
                    source,
                    checkpoint.last_run
                );
                return Ok(RunSummary::skipped(source));
            }
        }

        log::info!("Starting {} ingestion", source);

        let items = match feed.fetch().await {
            Ok(items) => items,
            Err(e) => {
                log::error!("{} ingestion failed during fetch: {}", source, e);
                return Err(e.into());
            }
        };

        match self.store.ingest_run(source, items, Utc::now()).await {
            Ok(summary) => {
                log::info!(
                    "{} ingestion completed: {} items, {} new assets, {} prices",
                    source,
                    summary.items,
                    summary.assets_created,
                    summary.prices_written
                );
                Ok(summary)
            }
            Err(e) => {
                log::error!("{} ingestion failed, run rolled back: {}", source, e);
                Err(e)
            }
        }
    }
}

#[async_trait::async_trait]
impl IngestionServiceTrait for IngestionService {
    async fn run_all(&self) -> Vec<RunOutcome> {
        let mut outcomes = Vec::with_capacity(self.feeds.len());
        for feed in &self.feeds {
            let outcome = self.run_feed(feed.as_ref()).await;
            outcomes.push(RunOutcome {
                source: feed.source_name().to_string(),
                outcome,
            });
        }
        outcomes
    }
}
