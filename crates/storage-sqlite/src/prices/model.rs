use chrono::{DateTime, NaiveDateTime, Utc};
use diesel::prelude::*;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use pricevault_core::prices::PriceObservation;

/// Database model for price observations. Prices are stored as decimal
/// strings, the domain type is `rust_decimal::Decimal`.
#[derive(Queryable, Identifiable, Selectable, QueryableByName, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = crate::schema::prices)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct PriceDB {
    pub id: i64,
    pub asset_id: i64,
    pub source: String,
    pub price_usd: String,
    pub fetched_at: NaiveDateTime,
}

/// Database model for inserting a new price observation
#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = crate::schema::prices)]
pub struct NewPriceDB {
    pub asset_id: i64,
    pub source: String,
    pub price_usd: String,
    pub fetched_at: NaiveDateTime,
}

impl From<PriceDB> for PriceObservation {
    fn from(db: PriceDB) -> Self {
        Self {
            id: db.id,
            asset_id: db.asset_id,
            source: db.source,
            price_usd: Decimal::from_str(&db.price_usd).unwrap_or_default(),
            fetched_at: DateTime::from_naive_utc_and_offset(db.fetched_at, Utc),
        }
    }
}
