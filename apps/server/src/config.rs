use std::{net::SocketAddr, time::Duration};

use pricevault_core::constants::COINPAPRIKA_TICKERS_URL;

pub struct Config {
    pub listen_addr: SocketAddr,
    pub db_path: String,
    pub csv_path: String,
    pub tickers_url: String,
    pub cors_allow: Vec<String>,
    pub request_timeout: Duration,
    pub ingest_on_startup: bool,
    pub ingest_interval: Duration,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        let listen_addr: SocketAddr = std::env::var("PV_LISTEN_ADDR")
            .unwrap_or_else(|_| "0.0.0.0:8080".to_string())
            .parse()
            .expect("Invalid PV_LISTEN_ADDR");
        let db_path = std::env::var("PV_DB_PATH").unwrap_or_else(|_| "./db/pricevault.db".into());
        let csv_path =
            std::env::var("PV_CSV_PATH").unwrap_or_else(|_| "./data/crypto_prices.csv".into());
        let tickers_url =
            std::env::var("PV_TICKERS_URL").unwrap_or_else(|_| COINPAPRIKA_TICKERS_URL.into());
        let cors_allow = std::env::var("PV_CORS_ALLOW_ORIGINS")
            .unwrap_or_else(|_| "*".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
        let timeout_ms: u64 = std::env::var("PV_REQUEST_TIMEOUT_MS")
            .unwrap_or_else(|_| "30000".into())
            .parse()
            .unwrap_or(30000);
        let ingest_on_startup = std::env::var("PV_INGEST_ON_STARTUP")
            .map(|v| v != "0" && !v.eq_ignore_ascii_case("false"))
            .unwrap_or(true);
        let interval_secs: u64 = std::env::var("PV_INGEST_INTERVAL_SECS")
            .unwrap_or_else(|_| "0".into())
            .parse()
            .unwrap_or(0);
        Self {
            listen_addr,
            db_path,
            csv_path,
            tickers_url,
            cors_allow,
            request_timeout: Duration::from_millis(timeout_ms),
            ingest_on_startup,
            ingest_interval: Duration::from_secs(interval_secs),
        }
    }
}
