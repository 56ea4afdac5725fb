//! Relay configuration. The hot wallet path is the one secret this process
//! holds; everything else mirrors the indexer's env-var convention.

use std::env;

#[derive(Debug, Clone)]
pub struct Config {
    pub rpc_url: String,
    pub program_id: String,
    pub bind_addr: String,
    pub fee_payer_keypair_path: String,
    pub max_retries: u32,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            rpc_url: env::var("RELAY_RPC_URL")
                .unwrap_or_else(|_| "https://api.devnet.solana.com".to_string()),
            program_id: env::var("RELAY_PROGRAM_ID")
                .unwrap_or_else(|_| "Ddokrq1M6hT9Vu63k4JWqVRSecyLeotNf8xKknKfRwvZ".to_string()),
            bind_addr: env::var("RELAY_BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:8081".to_string()),
            fee_payer_keypair_path: env::var("RELAY_FEE_PAYER_KEYPAIR")
                .unwrap_or_else(|_| "~/.config/solana/id.json".to_string()),
            max_retries: env::var("RELAY_MAX_RETRIES")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(5),
        }
    }
}
