use axum::http::Method;
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::handler;
use crate::state::AppState;

/// Build the axum router with all flysheet endpoints.
///
/// CORS is wide open: retrieval is unauthenticated and links are expected
/// to be embedded cross-origin.
pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers(Any);

    Router::new()
        .route("/artifacts", post(handler::create_artifact))
        .route("/artifacts/:id", get(handler::fetch_artifact))
        .route("/v1/health", get(handler::health))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
