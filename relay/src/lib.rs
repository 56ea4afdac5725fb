pub mod config;
pub mod error;
pub mod ledger;
pub mod routes;
pub mod state;

use axum::routing::post;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/deposit", post(routes::post_deposit))
        .route("/withdraw", post(routes::post_withdraw))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
