use chrono::{DateTime, NaiveDateTime, Utc};
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use pricevault_core::checkpoints::Checkpoint;

/// Database model for ETL checkpoints, one row per source.
#[derive(Queryable, Identifiable, Selectable, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = crate::schema::etl_checkpoints)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct CheckpointDB {
    pub id: i64,
    pub source: String,
    pub last_run: NaiveDateTime,
}

/// Database model for inserting a checkpoint
#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = crate::schema::etl_checkpoints)]
pub struct NewCheckpointDB {
    pub source: String,
    pub last_run: NaiveDateTime,
}

impl From<CheckpointDB> for Checkpoint {
    fn from(db: CheckpointDB) -> Self {
        Self {
            source: db.source,
            last_run: DateTime::from_naive_utc_and_offset(db.last_run, Utc),
        }
    }
}
