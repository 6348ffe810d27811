use std::sync::Arc;

use axum::{extract::State, Json};
use chrono::Utc;
use serde::Serialize;
use uuid::Uuid;

use crate::state::AppState;
use pricevault_storage_sqlite::db::get_connection;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub database: &'static str,
    pub timestamp: f64,
    pub request_id: String,
}

/// Liveness plus a database connectivity probe.
pub async fn health_check(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    let database_ok = get_connection(&state.pool).is_ok();
    Json(HealthResponse {
        status: if database_ok { "ok" } else { "degraded" },
        database: if database_ok { "connected" } else { "error" },
        timestamp: Utc::now().timestamp_millis() as f64 / 1000.0,
        request_id: Uuid::new_v4().to_string(),
    })
}
