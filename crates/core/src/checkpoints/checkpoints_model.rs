use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Per-source marker recording the last successful ingestion pass.
/// No history: a new run overwrites the prior timestamp.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Checkpoint {
    pub source: String,
    pub last_run: DateTime<Utc>,
}
