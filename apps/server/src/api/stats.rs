use std::sync::Arc;

use axum::{extract::State, Json};

use crate::error::ApiResult;
use crate::state::AppState;
use pricevault_core::query::Stats;

pub async fn get_stats(State(state): State<Arc<AppState>>) -> ApiResult<Json<Stats>> {
    Ok(Json(state.query_service.stats()?))
}
