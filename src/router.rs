use axum::http::{HeaderValue, Method};
use axum::{Router, middleware};
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use rollcall_observability::{logging_middleware, metrics_middleware};

use crate::docs::ApiDoc;
use crate::modules::checkin::init_checkin_router;
use crate::modules::codes::{init_code_api_router, init_codes_router};
use crate::modules::home::init_home_router;
use crate::modules::roster::{init_roster_api_router, init_roster_router};
use crate::state::AppState;

pub fn init_router(state: AppState) -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .merge(init_home_router())
        .merge(init_checkin_router())
        .merge(init_codes_router())
        .merge(init_roster_router())
        .nest(
            "/api/classes",
            Router::new()
                .merge(init_roster_api_router())
                .merge(init_code_api_router()),
        )
        .with_state(state.clone())
        .layer({
            let allowed_origins: Vec<HeaderValue> = state
                .cors_config
                .allowed_origins
                .iter()
                .filter_map(|origin| origin.parse().ok())
                .collect();

            CorsLayer::new()
                .allow_origin(allowed_origins)
                .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
                .allow_headers([
                    axum::http::header::AUTHORIZATION,
                    axum::http::header::CONTENT_TYPE,
                    axum::http::header::ACCEPT,
                ])
                .expose_headers([axum::http::HeaderName::from_static("qr-content")])
                .allow_credentials(true)
        })
        .layer(middleware::from_fn(metrics_middleware))
        .layer(middleware::from_fn(logging_middleware))
}
