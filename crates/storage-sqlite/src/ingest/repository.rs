use chrono::{DateTime, Utc};
use std::sync::Arc;

use pricevault_core::assets::NewAsset;
use pricevault_core::checkpoints::Checkpoint;
use pricevault_core::errors::{Error, Result};
use pricevault_core::ingestion::{FeedItem, IngestionStore, PriceTick, RunSummary};
use pricevault_core::prices::NewPriceObservation;

use crate::assets::repository::upsert_asset_in;
use crate::checkpoints::repository::{get_checkpoint_in, set_checkpoint_in};
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::prices::repository::upsert_price_in;
use crate::raw_data::repository::append_raw_in;

/// Write side of the ingestion pipeline.
///
/// One run is one writer-actor job, and therefore one immediate
/// transaction: the raw archive, asset and price writes for every item plus
/// the final checkpoint commit together or not at all.
pub struct IngestRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl IngestRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        Self { pool, writer }
    }
}

#[async_trait::async_trait]
impl IngestionStore for IngestRepository {
    fn get_checkpoint(&self, source: &str) -> Result<Option<Checkpoint>> {
        let mut conn = get_connection(&self.pool)?;
        get_checkpoint_in(&mut conn, source)
    }

    async fn ingest_run(
        &self,
        source: &str,
        items: Vec<FeedItem>,
        fetched_at: DateTime<Utc>,
    ) -> Result<RunSummary> {
        let source = source.to_string();

        self.writer
            .exec(move |conn| {
                let now = fetched_at.naive_utc();
                let mut summary = RunSummary::new(&source, items.len());

                for item in &items {
                    // Archive before interpreting: a malformed item aborts
                    // the run, and the rollback discards the archive rows
                    // written so far.
                    let payload = serde_json::to_string(&item.payload)?;
                    append_raw_in(conn, &source, payload, now)?;

                    let tick = PriceTick::from_payload(&item.payload).map_err(Error::Ingestion)?;
                    let (asset, created) =
                        upsert_asset_in(conn, &NewAsset::new(tick.symbol, tick.name), now)?;
                    if created {
                        summary.assets_created += 1;
                    }

                    upsert_price_in(
                        conn,
                        &NewPriceObservation {
                            asset_id: asset.id,
                            source: source.clone(),
                            price_usd: tick.price_usd,
                            fetched_at,
                        },
                    )?;
                    summary.prices_written += 1;
                }

                // Last write of the run: a recorded checkpoint implies every
                // preceding write succeeded.
                set_checkpoint_in(conn, &source, now)?;
                Ok(summary)
            })
            .await
    }
}
