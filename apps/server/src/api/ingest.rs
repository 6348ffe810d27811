use std::sync::Arc;

use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;

use crate::state::AppState;

#[derive(Serialize)]
pub struct SourceRunResponse {
    pub source: String,
    pub status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assets_created: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prices_written: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Runs the pipeline for every configured source, on demand.
pub async fn run_ingestion(
    State(state): State<Arc<AppState>>,
) -> (StatusCode, Json<Vec<SourceRunResponse>>) {
    let outcomes = state.ingestion_service.run_all().await;

    let mut any_failed = false;
    let body: Vec<SourceRunResponse> = outcomes
        .into_iter()
        .map(|o| match o.outcome {
            Ok(summary) => SourceRunResponse {
                source: o.source,
                status: if summary.skipped { "skipped" } else { "ok" },
                items: Some(summary.items),
                assets_created: Some(summary.assets_created),
                prices_written: Some(summary.prices_written),
                error: None,
            },
            Err(e) => {
                any_failed = true;
                SourceRunResponse {
                    source: o.source,
                    status: "failed",
                    items: None,
                    assets_created: None,
                    prices_written: None,
                    error: Some(e.to_string()),
                }
            }
        })
        .collect();

    let status = if any_failed {
        StatusCode::BAD_GATEWAY
    } else {
        StatusCode::OK
    };
    (status, Json(body))
}
