use chrono::NaiveDateTime;
use diesel::prelude::*;
use diesel::sqlite::SqliteConnection;
use std::sync::Arc;

use pricevault_core::errors::Result;
use pricevault_core::raw_data::{NewRawRecord, RawDataRepositoryTrait, RawRecord};

use super::model::{NewRawRecordDB, RawRecordDB};
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::IntoCore;
use crate::schema::raw_data;

/// Repository for the append-only raw archive.
pub struct RawDataRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl RawDataRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        Self { pool, writer }
    }
}

/// Appends one raw record on the caller's connection.
pub(crate) fn append_raw_in(
    conn: &mut SqliteConnection,
    source: &str,
    payload: String,
    ingested_at: NaiveDateTime,
) -> Result<RawRecord> {
    let row = NewRawRecordDB {
        source: source.to_string(),
        payload,
        ingested_at,
    };
    let db = diesel::insert_into(raw_data::table)
        .values(&row)
        .get_result::<RawRecordDB>(conn)
        .into_core()?;
    Ok(db.into())
}

#[async_trait::async_trait]
impl RawDataRepositoryTrait for RawDataRepository {
    async fn append(&self, record: NewRawRecord) -> Result<RawRecord> {
        let payload = serde_json::to_string(&record.payload)?;
        self.writer
            .exec(move |conn| {
                append_raw_in(conn, &record.source, payload, record.ingested_at.naive_utc())
            })
            .await
    }

    fn count(&self) -> Result<i64> {
        let mut conn = get_connection(&self.pool)?;
        raw_data::table.count().get_result(&mut conn).into_core()
    }
}
