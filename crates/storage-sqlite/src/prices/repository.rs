use diesel::prelude::*;
use diesel::sqlite::SqliteConnection;
use std::sync::Arc;

use pricevault_core::errors::Result;
use pricevault_core::prices::{NewPriceObservation, PriceObservation, PriceRepositoryTrait};

use super::model::{NewPriceDB, PriceDB};
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::IntoCore;
use crate::schema::prices;

/// Repository for per-source price observations.
pub struct PriceRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl PriceRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        Self { pool, writer }
    }
}

/// Inserts or overwrites the (asset, source) observation on the caller's
/// connection. Returns the observation and whether a new row was inserted.
pub(crate) fn upsert_price_in(
    conn: &mut SqliteConnection,
    observation: &NewPriceObservation,
) -> Result<(PriceObservation, bool)> {
    let existing = prices::table
        .filter(prices::asset_id.eq(observation.asset_id))
        .filter(prices::source.eq(&observation.source))
        .select(PriceDB::as_select())
        .first::<PriceDB>(conn)
        .optional()
        .into_core()?;

    let price_str = observation.price_usd.to_string();
    let fetched_at = observation.fetched_at.naive_utc();

    match existing {
        Some(row) => {
            let db = diesel::update(prices::table.find(row.id))
                .set((
                    prices::price_usd.eq(&price_str),
                    prices::fetched_at.eq(fetched_at),
                ))
                .get_result::<PriceDB>(conn)
                .into_core()?;
            Ok((db.into(), false))
        }
        None => {
            let row = NewPriceDB {
                asset_id: observation.asset_id,
                source: observation.source.clone(),
                price_usd: price_str,
                fetched_at,
            };
            let db = diesel::insert_into(prices::table)
                .values(&row)
                .get_result::<PriceDB>(conn)
                .into_core()?;
            Ok((db.into(), true))
        }
    }
}

#[async_trait::async_trait]
impl PriceRepositoryTrait for PriceRepository {
    async fn upsert(&self, observation: NewPriceObservation) -> Result<PriceObservation> {
        self.writer
            .exec(move |conn| upsert_price_in(conn, &observation).map(|(obs, _)| obs))
            .await
    }

    fn list_for_asset(&self, asset_id: i64) -> Result<Vec<PriceObservation>> {
        let mut conn = get_connection(&self.pool)?;

        let results = prices::table
            .filter(prices::asset_id.eq(asset_id))
            .order(prices::fetched_at.desc())
            .select(PriceDB::as_select())
            .load::<PriceDB>(&mut conn)
            .into_core()?;

        Ok(results.into_iter().map(PriceObservation::from).collect())
    }
}
