mod common;

use chrono::{TimeZone, Utc};
use rust_decimal_macros::dec;

use pricevault_core::assets::{AssetRepositoryTrait, NewAsset};
use pricevault_core::ingestion::IngestionStore;
use pricevault_core::prices::{NewPriceObservation, PriceRepositoryTrait};
use pricevault_core::query::QueryStore;
use pricevault_storage_sqlite::assets::AssetRepository;
use pricevault_storage_sqlite::ingest::IngestRepository;
use pricevault_storage_sqlite::prices::PriceRepository;
use pricevault_storage_sqlite::query::QueryRepository;

use common::{item, setup_db};

#[tokio::test]
async fn latest_price_comes_from_the_most_recent_source() {
    let dir = tempfile::tempdir().unwrap();
    let (pool, writer) = setup_db(&dir);
    let assets = AssetRepository::new(pool.clone(), writer.clone());
    let prices = PriceRepository::new(pool.clone(), writer);

    let btc = assets.upsert(NewAsset::new("BTC", "Bitcoin")).await.unwrap();
    prices
        .upsert(NewPriceObservation {
            asset_id: btc.id,
            source: "coinpaprika".to_string(),
            price_usd: dec!(100),
            fetched_at: Utc.timestamp_opt(10, 0).unwrap(),
        })
        .await
        .unwrap();
    prices
        .upsert(NewPriceObservation {
            asset_id: btc.id,
            source: "csv".to_string(),
            price_usd: dec!(105),
            fetched_at: Utc.timestamp_opt(20, 0).unwrap(),
        })
        .await
        .unwrap();

    let queries = QueryRepository::new(pool);
    let quotes = queries.list_asset_quotes(10, 0).unwrap();
    assert_eq!(quotes.len(), 1);
    assert_eq!(quotes[0].latest_price, Some(dec!(105)));
}

#[tokio::test]
async fn timestamp_tie_between_sources_yields_no_price() {
    let dir = tempfile::tempdir().unwrap();
    let (pool, writer) = setup_db(&dir);
    let assets = AssetRepository::new(pool.clone(), writer.clone());
    let prices = PriceRepository::new(pool.clone(), writer);

    let eth = assets
        .upsert(NewAsset::new("ETH", "Ethereum"))
        .await
        .unwrap();
    let fetched_at = Utc.timestamp_opt(42, 0).unwrap();
    for (source, value) in [("coinpaprika", dec!(3120)), ("csv", dec!(3121))] {
        prices
            .upsert(NewPriceObservation {
                asset_id: eth.id,
                source: source.to_string(),
                price_usd: value,
                fetched_at,
            })
            .await
            .unwrap();
    }

    let queries = QueryRepository::new(pool);
    let quotes = queries.list_asset_quotes(10, 0).unwrap();
    assert_eq!(quotes[0].latest_price, None);
}

#[tokio::test]
async fn asset_without_observations_has_no_price() {
    let dir = tempfile::tempdir().unwrap();
    let (pool, writer) = setup_db(&dir);
    let assets = AssetRepository::new(pool.clone(), writer);

    assets.upsert(NewAsset::new("DOT", "Polkadot")).await.unwrap();

    let queries = QueryRepository::new(pool);
    let quotes = queries.list_asset_quotes(10, 0).unwrap();
    assert_eq!(quotes.len(), 1);
    assert_eq!(quotes[0].latest_price, None);
}

#[tokio::test]
async fn pagination_slices_assets_in_insertion_order() {
    let dir = tempfile::tempdir().unwrap();
    let (pool, writer) = setup_db(&dir);
    let store = IngestRepository::new(pool.clone(), writer);

    let items = ["AAA", "BBB", "CCC", "DDD", "EEE"]
        .iter()
        .map(|s| item(s, &format!("Asset {}", s), "1.0"))
        .collect();
    store.ingest_run("csv", items, Utc::now()).await.unwrap();

    let queries = QueryRepository::new(pool);
    let page = queries.list_asset_quotes(2, 1).unwrap();
    let symbols: Vec<&str> = page.iter().map(|q| q.symbol.as_str()).collect();
    assert_eq!(symbols, vec!["BBB", "CCC"]);
}

#[tokio::test]
async fn stats_reflect_raw_and_normalized_counts() {
    let dir = tempfile::tempdir().unwrap();
    let (pool, writer) = setup_db(&dir);
    let store = IngestRepository::new(pool.clone(), writer);

    // 10 raw items over 7 distinct symbols.
    let symbols = ["S1", "S2", "S3", "S4", "S5", "S6", "S7", "S1", "S2", "S3"];
    let items = symbols
        .iter()
        .map(|s| item(s, &format!("Asset {}", s), "2.5"))
        .collect();
    store.ingest_run("coinpaprika", items, Utc::now()).await.unwrap();

    let queries = QueryRepository::new(pool);
    let stats = queries.stats().unwrap();
    assert_eq!(stats.raw_records, 10);
    assert_eq!(stats.normalized_records, 7);
    assert_eq!(stats.sources.len(), 1);
    assert_eq!(stats.sources[0].source, "coinpaprika");
}
