use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An archival copy of a single fetched item, kept for audit and replay.
/// Write-once; the payload is opaque to the rest of the system.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawRecord {
    pub id: i64,
    pub source: String,
    pub payload: String,
    pub ingested_at: DateTime<Utc>,
}

/// Payload for appending one raw record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewRawRecord {
    pub source: String,
    pub payload: serde_json::Value,
    pub ingested_at: DateTime<Utc>,
}
