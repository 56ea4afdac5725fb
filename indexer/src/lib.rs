pub mod config;
pub mod error;
pub mod ledger;
pub mod replica;
pub mod routes;
pub mod state;

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/merkle/root", get(routes::get_root))
        .route("/merkle/proof/:commitment", get(routes::get_proof_by_commitment))
        .route("/merkle/proof/index/:i", get(routes::get_proof_by_index))
        .route("/utxos", get(routes::get_utxos))
        .route("/utxos/range", get(routes::get_utxos_range))
        .route("/utxos/check/:blob", get(routes::get_utxo_check))
        .route("/zkcash/webhook/transaction", post(routes::post_webhook))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    fn test_state() -> AppState {
        AppState::new(config::Config::from_env(), 3, 30)
    }

    #[tokio::test]
    async fn root_endpoint_reports_empty_tree() {
        let app = build_router(test_state());
        let response = app
            .oneshot(Request::builder().uri("/merkle/root").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn proof_by_commitment_404s_on_unknown_commitment() {
        let app = build_router(test_state());
        let unknown = hex::encode([7u8; 32]);
        let response = app
            .oneshot(
                Request::builder()
                    .uri(format!("/merkle/proof/{unknown}"))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn proof_by_index_returns_zero_path_on_unknown_index() {
        let app = build_router(test_state());
        let response = app
            .oneshot(
                Request::builder()
                    .uri("/merkle/proof/index/99")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        // This is the one endpoint that answers an unknown index with a
        // dummy all-zero path instead of 404, per spec.md §9.
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn utxos_range_rejects_inverted_bounds() {
        let app = build_router(test_state());
        let response = app
            .oneshot(
                Request::builder()
                    .uri("/utxos/range?start=5&end=1")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
