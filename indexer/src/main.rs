use indexer::config::Config;
use indexer::ledger;
use indexer::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "indexer=info,tower_http=info".into()),
        )
        .init();

    let config = Config::from_env();
    let bind_addr = config.bind_addr.clone();
    // Height and ring size must match the on-chain tree's; a real deployment
    // reads these from the tree account once at startup instead of a flag.
    let state = AppState::new(config, 20, 100);

    tokio::spawn(ledger::run_poll_loop(state.clone()));

    let app = indexer::build_router(state);
    tracing::info!(%bind_addr, "starting indexer");
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
