use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

use super::controller::{get_roster, redirect_to_register_page, register_page};

pub fn init_roster_router() -> Router<AppState> {
    Router::new()
        .route("/registerPage", post(redirect_to_register_page))
        .route("/registerPage/{class_id}", get(register_page))
}

/// Mounted under `/api/classes`.
pub fn init_roster_api_router() -> Router<AppState> {
    Router::new().route("/{class_id}/roster", get(get_roster))
}
