use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// An asset with its most recent price across all sources.
///
/// `latest_price` is the observation with the strictly most recent
/// timestamp; a tie between sources, or no observation at all, yields
/// `None`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetQuote {
    pub symbol: String,
    pub name: String,
    pub latest_price: Option<Decimal>,
}

/// Snapshot of repository and checkpoint state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stats {
    pub raw_records: i64,
    pub normalized_records: i64,
    pub sources: Vec<SourceLastRun>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceLastRun {
    pub source: String,
    pub last_run: DateTime<Utc>,
}
