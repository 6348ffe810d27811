use chrono::{DateTime, NaiveDateTime, Utc};
use diesel::prelude::*;
use diesel::sqlite::SqliteConnection;
use std::sync::Arc;

use pricevault_core::checkpoints::{Checkpoint, CheckpointRepositoryTrait};
use pricevault_core::errors::Result;

use super::model::{CheckpointDB, NewCheckpointDB};
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::IntoCore;
use crate::schema::etl_checkpoints;

/// Repository for per-source ingestion checkpoints.
pub struct CheckpointRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl CheckpointRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        Self { pool, writer }
    }
}

pub(crate) fn get_checkpoint_in(
    conn: &mut SqliteConnection,
    source: &str,
) -> Result<Option<Checkpoint>> {
    let result = etl_checkpoints::table
        .filter(etl_checkpoints::source.eq(source))
        .select(CheckpointDB::as_select())
        .first::<CheckpointDB>(conn)
        .optional()
        .into_core()?;

    Ok(result.map(Checkpoint::from))
}

/// Creates or overwrites the checkpoint for `source` on the caller's
/// connection; the prior timestamp is discarded.
pub(crate) fn set_checkpoint_in(
    conn: &mut SqliteConnection,
    source: &str,
    last_run: NaiveDateTime,
) -> Result<Checkpoint> {
    let existing = etl_checkpoints::table
        .filter(etl_checkpoints::source.eq(source))
        .select(CheckpointDB::as_select())
        .first::<CheckpointDB>(conn)
        .optional()
        .into_core()?;

    let db = match existing {
        Some(row) => diesel::update(etl_checkpoints::table.find(row.id))
            .set(etl_checkpoints::last_run.eq(last_run))
            .get_result::<CheckpointDB>(conn)
            .into_core()?,
        None => {
            let row = NewCheckpointDB {
                source: source.to_string(),
                last_run,
            };
            diesel::insert_into(etl_checkpoints::table)
                .values(&row)
                .get_result::<CheckpointDB>(conn)
                .into_core()?
        }
    };

    Ok(db.into())
}

#[async_trait::async_trait]
impl CheckpointRepositoryTrait for CheckpointRepository {
    fn get(&self, source: &str) -> Result<Option<Checkpoint>> {
        let mut conn = get_connection(&self.pool)?;
        get_checkpoint_in(&mut conn, source)
    }

    async fn set(&self, source: &str, last_run: DateTime<Utc>) -> Result<Checkpoint> {
        let source = source.to_string();
        self.writer
            .exec(move |conn| set_checkpoint_in(conn, &source, last_run.naive_utc()))
            .await
    }

    fn list(&self) -> Result<Vec<Checkpoint>> {
        let mut conn = get_connection(&self.pool)?;

        let results = etl_checkpoints::table
            .order(etl_checkpoints::source.asc())
            .select(CheckpointDB::as_select())
            .load::<CheckpointDB>(&mut conn)
            .into_core()?;

        Ok(results.into_iter().map(Checkpoint::from).collect())
    }
}
