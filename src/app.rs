use crate::handlers;
use crate::state::AppState;
use axum::{routing::{get, post}, Router};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/healthz", get(handlers::healthz))
        .route("/api/config", get(handlers::get_config))
        .route("/api/analyze", post(handlers::analyze))
        .with_state(state)
}
