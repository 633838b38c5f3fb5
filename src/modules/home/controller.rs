use axum::{Json, extract::State, response::Html};
use serde::Serialize;
use utoipa::ToSchema;

use crate::state::AppState;
use crate::views;

#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    #[schema(example = "ok")]
    pub status: &'static str,
    #[schema(example = "0.1.0")]
    pub version: &'static str,
}

pub async fn intro(State(state): State<AppState>) -> Html<String> {
    Html(views::intro_page(&state.server_config.app_title))
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is up", body = HealthResponse)
    ),
    tag = "Health"
)]
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}
