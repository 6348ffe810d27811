use chrono::{NaiveDateTime, Utc};
use diesel::prelude::*;
use diesel::sqlite::SqliteConnection;
use std::sync::Arc;

use pricevault_core::assets::{Asset, AssetRepositoryTrait, NewAsset};
use pricevault_core::errors::Result;

use super::model::{AssetDB, NewAssetDB};
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::IntoCore;
use crate::schema::assets;

/// Repository for asset identity.
pub struct AssetRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl AssetRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        Self { pool, writer }
    }
}

/// Resolves an asset by symbol or inserts it, on the caller's connection so
/// the ingest pipeline can run it inside a wider transaction. Returns the
/// asset and whether it was created. The display name is written on
/// creation only; re-ingestion never renames an asset.
pub(crate) fn upsert_asset_in(
    conn: &mut SqliteConnection,
    new_asset: &NewAsset,
    now: NaiveDateTime,
) -> Result<(Asset, bool)> {
    let existing = assets::table
        .filter(assets::symbol.eq(&new_asset.symbol))
        .select(AssetDB::as_select())
        .first::<AssetDB>(conn)
        .optional()
        .into_core()?;

    match existing {
        Some(db) => Ok((db.into(), false)),
        None => {
            let row = NewAssetDB {
                symbol: new_asset.symbol.clone(),
                name: new_asset.name.clone(),
                created_at: now,
            };
            let db = diesel::insert_into(assets::table)
                .values(&row)
                .get_result::<AssetDB>(conn)
                .into_core()?;
            Ok((db.into(), true))
        }
    }
}

#[async_trait::async_trait]
impl AssetRepositoryTrait for AssetRepository {
    async fn upsert(&self, new_asset: NewAsset) -> Result<Asset> {
        new_asset.validate()?;
        self.writer
            .exec(move |conn| {
                upsert_asset_in(conn, &new_asset, Utc::now().naive_utc()).map(|(asset, _)| asset)
            })
            .await
    }

    fn get_by_symbol(&self, symbol: &str) -> Result<Option<Asset>> {
        let mut conn = get_connection(&self.pool)?;

        let result = assets::table
            .filter(assets::symbol.eq(symbol))
            .select(AssetDB::as_select())
            .first::<AssetDB>(&mut conn)
            .optional()
            .into_core()?;

        Ok(result.map(Asset::from))
    }

    fn list(&self, limit: i64, offset: i64) -> Result<Vec<Asset>> {
        let mut conn = get_connection(&self.pool)?;

        let results = assets::table
            .order(assets::id.asc())
            .limit(limit)
            .offset(offset)
            .select(AssetDB::as_select())
            .load::<AssetDB>(&mut conn)
            .into_core()?;

        Ok(results.into_iter().map(Asset::from).collect())
    }

    fn count(&self) -> Result<i64> {
        let mut conn = get_connection(&self.pool)?;
        assets::table.count().get_result(&mut conn).into_core()
    }
}
