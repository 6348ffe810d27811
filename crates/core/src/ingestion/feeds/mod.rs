//! Feed implementations for the two configured sources.

mod coinpaprika_feed;
mod csv_feed;

pub use coinpaprika_feed::CoinPaprikaFeed;
pub use csv_feed::CsvFeed;
