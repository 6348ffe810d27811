use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The current USD price of one asset as seen by one source.
///
/// Latest-wins: a (asset, source) pair holds exactly one observation and a
/// newer fetch overwrites value and timestamp in place. This is a
/// point-in-time cache per source, not a time series.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceObservation {
    pub id: i64,
    pub asset_id: i64,
    pub source: String,
    pub price_usd: Decimal,
    pub fetched_at: DateTime<Utc>,
}

/// Payload for inserting or overwriting a (asset, source) observation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewPriceObservation {
    pub asset_id: i64,
    pub source: String,
    pub price_usd: Decimal,
    pub fetched_at: DateTime<Utc>,
}
