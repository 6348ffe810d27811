use diesel::prelude::*;
use diesel::sql_query;
use diesel::sql_types::BigInt;
use diesel::sqlite::Sqlite;
use rust_decimal::Decimal;
use std::collections::HashMap;
use std::str::FromStr;
use std::sync::Arc;

use pricevault_core::checkpoints::Checkpoint;
use pricevault_core::errors::Result;
use pricevault_core::query::{AssetQuote, QueryStore, SourceLastRun, Stats};

use crate::assets::model::AssetDB;
use crate::checkpoints::model::CheckpointDB;
use crate::db::{get_connection, DbPool};
use crate::errors::IntoCore;
use crate::prices::model::PriceDB;
use crate::schema::{assets, etl_checkpoints, raw_data};

/// Read-only store behind the query service.
pub struct QueryRepository {
    pool: Arc<DbPool>,
}

impl QueryRepository {
    pub fn new(pool: Arc<DbPool>) -> Self {
        Self { pool }
    }
}

impl QueryStore for QueryRepository {
    fn list_asset_quotes(&self, limit: i64, offset: i64) -> Result<Vec<AssetQuote>> {
        let mut conn = get_connection(&self.pool)?;

        let page = assets::table
            .order(assets::id.asc())
            .limit(limit)
            .offset(offset)
            .select(AssetDB::as_select())
            .load::<AssetDB>(&mut conn)
            .into_core()?;

        if page.is_empty() {
            return Ok(Vec::new());
        }

        // Top-2 observations per asset. The second row only matters for
        // detecting a timestamp tie, which yields a null latest price.
        let placeholders = page.iter().map(|_| "?").collect::<Vec<_>>().join(", ");
        let sql = format!(
            "WITH RankedPrices AS ( \
                SELECT \
                    p.*, \
                    ROW_NUMBER() OVER (PARTITION BY p.asset_id ORDER BY p.fetched_at DESC, p.id DESC) as rn \
                FROM prices p WHERE p.asset_id IN ({}) \
            ) \
            SELECT id, asset_id, source, price_usd, fetched_at \
            FROM RankedPrices \
            WHERE rn <= 2 \
            ORDER BY asset_id, rn",
            placeholders
        );

        let mut query_builder = sql_query(sql).into_boxed::<Sqlite>();
        for asset in &page {
            query_builder = query_builder.bind::<BigInt, _>(asset.id);
        }

        let ranked: Vec<PriceDB> = query_builder.load::<PriceDB>(&mut conn).into_core()?;

        let mut by_asset: HashMap<i64, Vec<PriceDB>> = HashMap::new();
        for row in ranked {
            by_asset.entry(row.asset_id).or_default().push(row);
        }

        let quotes = page
            .into_iter()
            .map(|asset| {
                let latest_price = by_asset.get(&asset.id).and_then(|rows| {
                    let first = rows.first()?;
                    match rows.get(1) {
                        Some(second) if second.fetched_at == first.fetched_at => None,
                        _ => Decimal::from_str(&first.price_usd).ok(),
                    }
                });
                AssetQuote {
                    symbol: asset.symbol,
                    name: asset.name,
                    latest_price,
                }
            })
            .collect();

        Ok(quotes)
    }

    fn stats(&self) -> Result<Stats> {
        let mut conn = get_connection(&self.pool)?;

        let raw_records: i64 = raw_data::table.count().get_result(&mut conn).into_core()?;
        let normalized_records: i64 = assets::table.count().get_result(&mut conn).into_core()?;

        let checkpoints = etl_checkpoints::table
            .order(etl_checkpoints::source.asc())
            .select(CheckpointDB::as_select())
            .load::<CheckpointDB>(&mut conn)
            .into_core()?;

        Ok(Stats {
            raw_records,
            normalized_records,
            sources: checkpoints
                .into_iter()
                .map(Checkpoint::from)
                .map(|c| SourceLastRun {
                    source: c.source,
                    last_run: c.last_run,
                })
                .collect(),
        })
    }
}
