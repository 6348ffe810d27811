use super::prices_model::{NewPriceObservation, PriceObservation};
use crate::errors::Result;

/// Trait defining the contract for price observation storage.
#[async_trait::async_trait]
pub trait PriceRepositoryTrait: Send + Sync {
    /// Inserts the observation if none exists for (asset, source), else
    /// overwrites price and timestamp in place.
    async fn upsert(&self, observation: NewPriceObservation) -> Result<PriceObservation>;

    fn list_for_asset(&self, asset_id: i64) -> Result<Vec<PriceObservation>>;
}
