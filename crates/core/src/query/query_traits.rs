use super::query_model::{AssetQuote, Stats};
use crate::errors::Result;

/// Read-only store behind the query service, implemented by storage.
pub trait QueryStore: Send + Sync {
    /// Pages assets in insertion order, each joined with its latest price.
    fn list_asset_quotes(&self, limit: i64, offset: i64) -> Result<Vec<AssetQuote>>;

    fn stats(&self) -> Result<Stats>;
}

/// Trait defining the contract for the query service.
pub trait QueryServiceTrait: Send + Sync {
    fn list_assets(&self, limit: Option<i64>, offset: Option<i64>) -> Result<Vec<AssetQuote>>;

    fn stats(&self) -> Result<Stats>;
}
