//! Background ingestion runs, decoupled from serving.

use std::sync::Arc;
use tokio::time::{interval, Duration};
use tracing::{info, warn};

use crate::state::AppState;

/// Delay before the startup run, so the listener is up first.
const STARTUP_DELAY_SECS: u64 = 1;

/// Runs the pipeline once, shortly after startup.
pub fn spawn_startup_run(state: Arc<AppState>) {
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_secs(STARTUP_DELAY_SECS)).await;
        run_pipeline(&state).await;
    });
}

/// Re-runs the pipeline on a fixed interval. Checkpoint-gated sources
/// still skip themselves; only ungated sources re-fetch.
pub fn spawn_periodic_runs(state: Arc<AppState>, every: Duration) {
    tokio::spawn(async move {
        info!("Ingestion scheduler started ({:?} interval)", every);
        let mut ticker = interval(every);
        // The first tick completes immediately; the startup run covers it.
        ticker.tick().await;
        loop {
            ticker.tick().await;
            run_pipeline(&state).await;
        }
    });
}

async fn run_pipeline(state: &Arc<AppState>) {
    for outcome in state.ingestion_service.run_all().await {
        match outcome.outcome {
            Ok(summary) if summary.skipped => {
                info!("Scheduled ingestion for {} skipped", outcome.source);
            }
            Ok(summary) => {
                info!(
                    "Scheduled ingestion for {} completed: {} items",
                    outcome.source, summary.items
                );
            }
            Err(e) => {
                warn!("Scheduled ingestion for {} failed: {}", outcome.source, e);
            }
        }
    }
}
