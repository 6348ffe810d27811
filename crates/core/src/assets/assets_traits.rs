use super::assets_model::{Asset, NewAsset};
use crate::errors::Result;

/// Trait defining the contract for Asset repository operations.
#[async_trait::async_trait]
pub trait AssetRepositoryTrait: Send + Sync {
    /// Resolves an existing asset by symbol or creates one. Idempotent:
    /// repeated calls with the same symbol return the same asset, and the
    /// display name is written on creation only.
    async fn upsert(&self, new_asset: NewAsset) -> Result<Asset>;

    fn get_by_symbol(&self, symbol: &str) -> Result<Option<Asset>>;

    /// Lists assets in insertion order (surrogate id ascending).
    fn list(&self, limit: i64, offset: i64) -> Result<Vec<Asset>>;

    fn count(&self) -> Result<i64>;
}
