use chrono::{DateTime, NaiveDateTime, Utc};
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use pricevault_core::raw_data::RawRecord;

/// Database model for the raw archive. Rows are write-once.
#[derive(Queryable, Identifiable, Selectable, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = crate::schema::raw_data)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct RawRecordDB {
    pub id: i64,
    pub source: String,
    pub payload: String,
    pub ingested_at: NaiveDateTime,
}

/// Database model for appending a raw record
#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = crate::schema::raw_data)]
pub struct NewRawRecordDB {
    pub source: String,
    pub payload: String,
    pub ingested_at: NaiveDateTime,
}

impl From<RawRecordDB> for RawRecord {
    fn from(db: RawRecordDB) -> Self {
        Self {
            id: db.id,
            source: db.source,
            payload: db.payload,
            ingested_at: DateTime::from_naive_utc_and_offset(db.ingested_at, Utc),
        }
    }
}
