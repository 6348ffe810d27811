use chrono::{DateTime, NaiveDateTime, Utc};
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use pricevault_core::assets::Asset;

/// Database model for assets
#[derive(Queryable, Identifiable, Selectable, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = crate::schema::assets)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct AssetDB {
    pub id: i64,
    pub symbol: String,
    pub name: String,
    pub created_at: NaiveDateTime,
}

/// Database model for inserting a new asset
#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = crate::schema::assets)]
pub struct NewAssetDB {
    pub symbol: String,
    pub name: String,
    pub created_at: NaiveDateTime,
}

impl From<AssetDB> for Asset {
    fn from(db: AssetDB) -> Self {
        Self {
            id: db.id,
            symbol: db.symbol,
            name: db.name,
            created_at: DateTime::from_naive_utc_and_offset(db.created_at, Utc),
        }
    }
}
