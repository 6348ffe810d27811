use std::sync::Arc;

use pricevault_core::ingestion::FeedItem;
use pricevault_storage_sqlite::db::{self, DbPool, WriteHandle};

/// Opens a fresh migrated database inside `dir` and spawns its writer.
/// Must run inside a tokio runtime (the writer is a spawned task).
pub fn setup_db(dir: &tempfile::TempDir) -> (Arc<DbPool>, WriteHandle) {
    let db_path = dir.path().join("test.db");
    let db_path = db_path.to_str().unwrap();
    db::init(db_path).unwrap();
    let pool = db::create_pool(db_path).unwrap();
    db::run_migrations(&pool).unwrap();
    let writer = db::spawn_writer((*pool).clone());
    (pool, writer)
}

pub fn item(symbol: &str, name: &str, price: &str) -> FeedItem {
    FeedItem::new(serde_json::json!({
        "symbol": symbol,
        "name": name,
        "price_usd": price,
    }))
}
