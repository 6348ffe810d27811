use std::sync::Arc;

use super::query_model::{AssetQuote, Stats};
use super::query_traits::{QueryServiceTrait, QueryStore};
use crate::constants::{DEFAULT_PAGE_LIMIT, MAX_PAGE_LIMIT};
use crate::errors::Result;

/// Read-only aggregation over the repository. Never mutates.
pub struct QueryService {
    store: Arc<dyn QueryStore>,
}

impl QueryService {
    pub fn new(store: Arc<dyn QueryStore>) -> Self {
        Self { store }
    }
}

impl QueryServiceTrait for QueryService {
    fn list_assets(&self, limit: Option<i64>, offset: Option<i64>) -> Result<Vec<AssetQuote>> {
        let limit = limit.unwrap_or(DEFAULT_PAGE_LIMIT).clamp(1, MAX_PAGE_LIMIT);
        let offset = offset.unwrap_or(0).max(0);
        self.store.list_asset_quotes(limit, offset)
    }

    fn stats(&self) -> Result<Stats> {
        self.store.stats()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[derive(Default)]
    struct SpyStore {
        calls: Mutex<Vec<(i64, i64)>>,
    }

    impl QueryStore for SpyStore {
        fn list_asset_quotes(&self, limit: i64, offset: i64) -> Result<Vec<AssetQuote>> {
            self.calls.lock().unwrap().push((limit, offset));
            Ok(Vec::new())
        }

        fn stats(&self) -> Result<Stats> {
            Ok(Stats {
                raw_records: 0,
                normalized_records: 0,
                sources: Vec::new(),
            })
        }
    }

    #[test]
    fn clamps_page_parameters() {
        let store = Arc::new(SpyStore::default());
        let service = QueryService::new(store.clone());

        service.list_assets(None, None).unwrap();
        service.list_assets(Some(0), Some(-5)).unwrap();
        service.list_assets(Some(10_000), Some(3)).unwrap();

        let calls = store.calls.lock().unwrap();
        assert_eq!(*calls, vec![(10, 0), (1, 0), (100, 3)]);
    }
}
