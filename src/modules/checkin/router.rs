use axum::{Router, routing::get};

use crate::state::AppState;

use super::controller::check_in;

pub fn init_checkin_router() -> Router<AppState> {
    Router::new().route("/entrypoint/{token}", get(check_in))
}
