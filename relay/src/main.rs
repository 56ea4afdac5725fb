use solana_sdk::signature::{read_keypair_file, Keypair};

use relay::config::Config;
use relay::state::AppState;

fn load_fee_payer(path: &str) -> anyhow::Result<Keypair> {
    let expanded = expand_home(path);
    read_keypair_file(&expanded).map_err(|e| anyhow::anyhow!("failed to read fee payer keypair at {expanded}: {e}"))
}

fn expand_home(path: &str) -> String {
    if let Some(rest) = path.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(rest).to_string_lossy().into_owned();
        }
    }
    path.to_string()
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "relay=info,tower_http=info".into()),
        )
        .init();

    let config = Config::from_env();
    let bind_addr = config.bind_addr.clone();
    let fee_payer = load_fee_payer(&config.fee_payer_keypair_path)?;

    let state = AppState::new(config, fee_payer);
    let app = relay::build_router(state);

    tracing::info!(%bind_addr, "starting relay");
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
