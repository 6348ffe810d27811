use std::sync::Arc;
use std::time::Instant;

use axum::{
    extract::{Query, State},
    Json,
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::ApiResult;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct DataParams {
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

#[derive(Serialize)]
pub struct AssetRow {
    pub symbol: String,
    pub name: String,
    pub latest_price_usd: Option<Decimal>,
}

#[derive(Serialize)]
pub struct DataResponse {
    pub request_id: String,
    pub api_latency_ms: u64,
    pub count: usize,
    pub data: Vec<AssetRow>,
}

pub async fn get_data(
    State(state): State<Arc<AppState>>,
    Query(params): Query<DataParams>,
) -> ApiResult<Json<DataResponse>> {
    let started = Instant::now();
    let request_id = Uuid::new_v4().to_string();

    let quotes = state
        .query_service
        .list_assets(params.limit, params.offset)?;
    let data: Vec<AssetRow> = quotes
        .into_iter()
        .map(|q| AssetRow {
            symbol: q.symbol,
            name: q.name,
            latest_price_usd: q.latest_price,
        })
        .collect();

    Ok(Json(DataResponse {
        request_id,
        api_latency_ms: started.elapsed().as_millis() as u64,
        count: data.len(),
        data,
    }))
}
