//! Indexer configuration, loaded from environment variables with sane
//! development defaults. No config file; every value a production deployer
//! needs to override has a matching `INDEXER_*` variable.

use std::env;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct Config {
    pub rpc_url: String,
    pub program_id: String,
    pub bind_addr: String,
    pub poll_interval: Duration,
    pub webhook_shared_secret: Option<String>,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            rpc_url: env::var("INDEXER_RPC_URL")
                .unwrap_or_else(|_| "https://api.devnet.solana.com".to_string()),
            program_id: env::var("INDEXER_PROGRAM_ID")
                .unwrap_or_else(|_| "Ddokrq1M6hT9Vu63k4JWqVRSecyLeotNf8xKknKfRwvZ".to_string()),
            bind_addr: env::var("INDEXER_BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".to_string()),
            poll_interval: Duration::from_millis(
                env::var("INDEXER_POLL_INTERVAL_MS")
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(2_000),
            ),
            webhook_shared_secret: env::var("INDEXER_WEBHOOK_SECRET").ok(),
        }
    }
}
