use std::sync::Arc;

use solana_client::rpc_client::RpcClient;
use solana_sdk::signature::Keypair;

use crate::config::Config;

pub struct AppState {
    pub rpc_client: Arc<RpcClient>,
    pub fee_payer: Arc<Keypair>,
    pub config: Arc<Config>,
}

impl Clone for AppState {
    fn clone(&self) -> Self {
        Self {
            rpc_client: self.rpc_client.clone(),
            fee_payer: self.fee_payer.clone(),
            config: self.config.clone(),
        }
    }
}

impl AppState {
    pub fn new(config: Config, fee_payer: Keypair) -> Self {
        let rpc_client = RpcClient::new(config.rpc_url.clone());
        Self {
            rpc_client: Arc::new(rpc_client),
            fee_payer: Arc::new(fee_payer),
            config: Arc::new(config),
        }
    }
}
