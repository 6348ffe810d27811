use std::io::Write;
use std::time::Duration;

use axum::body::Body;
use axum::http::Request;
use serde_json::Value;
use tower::ServiceExt;

use pricevault_server::{api::app_router, build_state, config::Config};

fn test_config(dir: &tempfile::TempDir) -> Config {
    Config {
        listen_addr: "127.0.0.1:0".parse().unwrap(),
        db_path: dir.path().join("test.db").to_str().unwrap().to_string(),
        csv_path: dir.path().join("prices.csv").to_str().unwrap().to_string(),
        // Nothing listens on port 1, so the live source always fails fast.
        tickers_url: "http://127.0.0.1:1/v1/tickers".to_string(),
        cors_allow: vec!["*".to_string()],
        request_timeout: Duration::from_secs(30),
        ingest_on_startup: false,
        ingest_interval: Duration::from_secs(0),
    }
}

fn write_csv(dir: &tempfile::TempDir) {
    let mut file = std::fs::File::create(dir.path().join("prices.csv")).unwrap();
    file.write_all(b"symbol,name,price_usd\nBTC,Bitcoin,64250.50\nETH,Ethereum,3120.42\n")
        .unwrap();
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn health_reports_connected_database() {
    let dir = tempfile::tempdir().unwrap();
    let config = test_config(&dir);
    let state = build_state(&config).await.unwrap();
    let app = app_router(state, &config);

    let response = app
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), 200);

    let body = body_json(response).await;
    assert_eq!(body["status"], "ok");
    assert_eq!(body["database"], "connected");
    assert!(body["request_id"].is_string());
    assert!(body["timestamp"].is_number());
}

#[tokio::test]
async fn ingest_then_query_data_and_stats() {
    let dir = tempfile::tempdir().unwrap();
    write_csv(&dir);
    let config = test_config(&dir);
    let state = build_state(&config).await.unwrap();
    let app = app_router(state, &config);

    // The live source is unreachable, so the run reports a partial failure
    // while the CSV source ingests normally.
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/ingest/run")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), 502);

    let runs = body_json(response).await;
    let csv_run = runs
        .as_array()
        .unwrap()
        .iter()
        .find(|r| r["source"] == "csv")
        .unwrap();
    assert_eq!(csv_run["status"], "ok");
    assert_eq!(csv_run["items"], 2);

    let response = app
        .clone()
        .oneshot(Request::builder().uri("/data").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), 200);

    let body = body_json(response).await;
    assert_eq!(body["count"], 2);
    assert_eq!(body["data"][0]["symbol"], "BTC");
    assert_eq!(body["data"][0]["latest_price_usd"], 64250.50);

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/data?limit=1&offset=1")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    let body = body_json(response).await;
    assert_eq!(body["count"], 1);
    assert_eq!(body["data"][0]["symbol"], "ETH");

    let response = app
        .oneshot(Request::builder().uri("/stats").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), 200);

    let body = body_json(response).await;
    assert_eq!(body["raw_records"], 2);
    assert_eq!(body["normalized_records"], 2);
    let sources = body["sources"].as_array().unwrap();
    assert!(sources.iter().any(|s| s["source"] == "csv"));
}

#[tokio::test]
async fn second_ingest_skips_the_gated_csv_source() {
    let dir = tempfile::tempdir().unwrap();
    write_csv(&dir);
    let config = test_config(&dir);
    let state = build_state(&config).await.unwrap();
    let app = app_router(state, &config);

    for expected_status in ["ok", "skipped"] {
        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/ingest/run")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        let runs = body_json(response).await;
        let csv_run = runs
            .as_array()
            .unwrap()
            .iter()
            .find(|r| r["source"] == "csv")
            .unwrap()
            .clone();
        assert_eq!(csv_run["status"], expected_status);
    }

    // Raw records were written by the first run only.
    let response = app
        .oneshot(Request::builder().uri("/stats").body(Body::empty()).unwrap())
        .await
        .unwrap();
    let body = body_json(response).await;
    assert_eq!(body["raw_records"], 2);
}
