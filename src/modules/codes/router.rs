use axum::{Router, routing::get};

use crate::state::AppState;

use super::controller::{generate_code, get_checkin_code};

pub fn init_codes_router() -> Router<AppState> {
    Router::new().route("/generateCode/{class_id}", get(generate_code))
}

/// Mounted under `/api/classes`.
pub fn init_code_api_router() -> Router<AppState> {
    Router::new().route("/{class_id}/code", get(get_checkin_code))
}
