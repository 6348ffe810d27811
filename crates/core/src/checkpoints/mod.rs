//! ETL checkpoints - per-source markers of the last successful run.

mod checkpoints_model;
mod checkpoints_traits;

pub use checkpoints_model::Checkpoint;
pub use checkpoints_traits::CheckpointRepositoryTrait;
