use chrono::{DateTime, Utc};

use super::checkpoints_model::Checkpoint;
use crate::errors::Result;

/// Trait defining the contract for checkpoint storage.
#[async_trait::async_trait]
pub trait CheckpointRepositoryTrait: Send + Sync {
    fn get(&self, source: &str) -> Result<Option<Checkpoint>>;

    /// Creates or overwrites the checkpoint for `source`; the prior value
    /// is discarded.
    async fn set(&self, source: &str, last_run: DateTime<Utc>) -> Result<Checkpoint>;

    fn list(&self) -> Result<Vec<Checkpoint>>;
}
