use std::sync::Arc;

use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use crate::config::Config;
use pricevault_core::ingestion::{
    CoinPaprikaFeed, CsvFeed, IngestionService, IngestionServiceTrait, PriceFeed,
};
use pricevault_core::query::{QueryService, QueryServiceTrait};
use pricevault_storage_sqlite::db::{self, DbPool};
use pricevault_storage_sqlite::ingest::IngestRepository;
use pricevault_storage_sqlite::query::QueryRepository;

pub struct AppState {
    pub pool: Arc<DbPool>,
    pub ingestion_service: Arc<dyn IngestionServiceTrait>,
    pub query_service: Arc<dyn QueryServiceTrait>,
}

pub fn init_tracing() {
    let fmt_layer = fmt::layer().json().with_current_span(false);
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .init();
}

pub async fn build_state(config: &Config) -> anyhow::Result<Arc<AppState>> {
    db::init(&config.db_path)?;
    tracing::info!("Database path in use: {}", config.db_path);

    let pool = db::create_pool(&config.db_path)?;
    db::run_migrations(&pool)?;
    let writer = db::spawn_writer((*pool).clone());

    let ingest_repository = Arc::new(IngestRepository::new(pool.clone(), writer.clone()));
    let feeds: Vec<Arc<dyn PriceFeed>> = vec![
        Arc::new(CoinPaprikaFeed::new(&config.tickers_url)),
        Arc::new(CsvFeed::new(&config.csv_path)),
    ];
    let ingestion_service = Arc::new(IngestionService::new(ingest_repository, feeds));

    let query_repository = Arc::new(QueryRepository::new(pool.clone()));
    let query_service = Arc::new(QueryService::new(query_repository));

    Ok(Arc::new(AppState {
        pool,
        ingestion_service,
        query_service,
    }))
}
