use thiserror::Error;

/// Errors raised while fetching or transforming source data.
///
/// Any of these aborts the whole run for that source: pending writes are
/// rolled back and the error propagates to the caller. None are retried.
#[derive(Error, Debug)]
pub enum IngestError {
    /// Transport-level failure of the upstream fetch: connection refused,
    /// timeout, or an unreadable body.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Upstream answered with a non-success status or an unusable payload.
    #[error("Fetch failed: {0}")]
    Fetch(String),

    /// A fetched item or file row is missing a required field or carries a
    /// value that does not parse.
    #[error("Malformed item: {0}")]
    MalformedItem(String),

    /// The file feed could not be opened.
    #[error("Feed unavailable: {0}")]
    Feed(String),
}
