//! Shared constants.

/// Source name of the live CoinPaprika tickers feed.
pub const SOURCE_COINPAPRIKA: &str = "coinpaprika";

/// Source name of the local CSV feed.
pub const SOURCE_CSV: &str = "csv";

/// Default endpoint of the live tickers feed.
pub const COINPAPRIKA_TICKERS_URL: &str = "https://api.coinpaprika.com/v1/tickers";

/// Timeout applied to the single upstream fetch.
pub const FETCH_TIMEOUT_SECS: u64 = 10;

/// Volume cap on the live feed: only the first N items of the
/// response are ingested. A cap, not pagination.
pub const LIVE_FEED_ITEM_CAP: usize = 10;

/// Default page size for asset listings.
pub const DEFAULT_PAGE_LIMIT: i64 = 10;

/// Upper bound on a requested page size.
pub const MAX_PAGE_LIMIT: i64 = 100;
