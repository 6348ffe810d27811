//! Ingestion pipeline - feeds, models, errors and the orchestrating service.
//!
//! Each source implements [`PriceFeed`]; the [`IngestionService`] runs the
//! gate -> fetch -> transactional-write sequence per source. The write side
//! is behind [`IngestionStore`] so this crate stays database-agnostic.

mod ingestion_errors;
mod ingestion_model;
mod ingestion_service;
mod ingestion_traits;
pub mod feeds;

pub use ingestion_errors::IngestError;
pub use ingestion_model::{FeedItem, PriceTick, RunOutcome, RunSummary};
pub use ingestion_service::IngestionService;
pub use ingestion_traits::{IngestionServiceTrait, IngestionStore, PriceFeed};

pub use feeds::{CoinPaprikaFeed, CsvFeed};
