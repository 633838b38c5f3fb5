use axum::{Router, routing::get};

use crate::state::AppState;

use super::controller::{health, intro};

pub fn init_home_router() -> Router<AppState> {
    Router::new()
        .route("/", get(intro))
        .route("/health", get(health))
}
