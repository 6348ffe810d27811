use chrono::{DateTime, Utc};

use super::ingestion_errors::IngestError;
use super::ingestion_model::{FeedItem, RunOutcome, RunSummary};
use crate::checkpoints::Checkpoint;
use crate::errors::Result;

/// A single upstream price source.
#[async_trait::async_trait]
pub trait PriceFeed: Send + Sync {
    fn source_name(&self) -> &'static str;

    /// Whether an existing checkpoint short-circuits the run before any
    /// fetch happens.
    fn checkpoint_gated(&self) -> bool;

    /// Retrieves the source's items as raw payloads, in source order.
    async fn fetch(&self) -> std::result::Result<Vec<FeedItem>, IngestError>;
}

/// Write side of the pipeline, implemented by the storage crate.
#[async_trait::async_trait]
pub trait IngestionStore: Send + Sync {
    fn get_checkpoint(&self, source: &str) -> Result<Option<Checkpoint>>;

    /// Applies one full run as a single transaction: per item, archive the
    /// raw payload, resolve the asset and overwrite the (asset, source)
    /// price; then record the checkpoint as the last write. Any failure
    /// rolls back everything - no partial checkpoint is ever recorded.
    async fn ingest_run(
        &self,
        source: &str,
        items: Vec<FeedItem>,
        fetched_at: DateTime<Utc>,
    ) -> Result<RunSummary>;
}

/// Trait defining the contract for the ingestion service.
#[async_trait::async_trait]
pub trait IngestionServiceTrait: Send + Sync {
    /// Runs every configured source in order and reports each outcome;
    /// one source failing does not stop the others.
    async fn run_all(&self) -> Vec<RunOutcome>;
}
