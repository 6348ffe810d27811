use super::raw_data_model::{NewRawRecord, RawRecord};
use crate::errors::Result;

/// Trait defining the contract for the raw archive.
#[async_trait::async_trait]
pub trait RawDataRepositoryTrait: Send + Sync {
    /// Always inserts a new record; archived payloads are never updated.
    async fn append(&self, record: NewRawRecord) -> Result<RawRecord>;

    fn count(&self) -> Result<i64>;
}
