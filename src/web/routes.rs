use axum::{routing::get, Router};
use std::sync::Arc;

use super::handlers;
use super::AppState;

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/blocks/browse", get(handlers::browse_blocks))
        .route("/blocks/:identifier", get(handlers::block_details))
        .route("/transactions/:txid", get(handlers::transaction_details))
        .route("/search", get(handlers::search_form))
        .route("/search/:query", get(handlers::search))
        .with_state(state)
}
