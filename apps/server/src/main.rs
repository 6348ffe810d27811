use pricevault_server::{api::app_router, build_state, config::Config, init_tracing, scheduler};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env();
    init_tracing();
    let state = build_state(&config).await?;

    // Serving never waits on upstream sources: the startup run happens in
    // the background after the listener is bound, and a failed run is
    // logged, not fatal.
    if config.ingest_on_startup {
        scheduler::spawn_startup_run(state.clone());
    }
    if !config.ingest_interval.is_zero() {
        scheduler::spawn_periodic_runs(state.clone(), config.ingest_interval);
    }

    let router = app_router(state, &config);
    let listener = tokio::net::TcpListener::bind(config.listen_addr).await?;
    tracing::info!("Listening on {}", config.listen_addr);
    axum::serve(listener, router).await?;
    Ok(())
}
