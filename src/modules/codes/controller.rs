use axum::{
    Json,
    extract::{Path, State},
    http::header,
    response::{IntoResponse, Response},
};
use tracing::instrument;

use rollcall_core::AppError;
use rollcall_models::CheckInCodeResponse;
use rollcall_observability::track_token_issued;

use crate::middleware::session::OrganizerUser;
use crate::modules::codes::service::CodeService;
use crate::state::AppState;

/// Header carrying the raw URL encoded in the returned QR code.
pub const QR_CONTENT_HEADER: &str = "QR-Content";

#[utoipa::path(
    get,
    path = "/generateCode/{class_id}",
    params(
        ("class_id" = String, Path, description = "Class identifier")
    ),
    responses(
        (status = 200, description = "QR code of a fresh check-in URL", body = String, content_type = "image/svg+xml"),
        (status = 303, description = "No session, redirected to login"),
        (status = 403, description = "Forbidden - organizer access required"),
        (status = 500, description = "Secret store failure")
    ),
    tag = "Codes",
    security(("session_cookie" = []), ("bearer_auth" = []))
)]
#[instrument(skip(state, _organizer))]
pub async fn generate_code(
    State(state): State<AppState>,
    _organizer: OrganizerUser,
    Path(class_id): Path<String>,
) -> Result<Response, AppError> {
    let code = CodeService::generate(&state.tokens, &state.server_config.base_url, &class_id).await?;
    track_token_issued();

    Ok((
        [
            (header::CONTENT_TYPE, "image/svg+xml".to_string()),
            (header::CACHE_CONTROL, "no-store".to_string()),
        ],
        [(QR_CONTENT_HEADER, code.url)],
        code.svg,
    )
        .into_response())
}

#[utoipa::path(
    get,
    path = "/api/classes/{class_id}/code",
    params(
        ("class_id" = String, Path, description = "Class identifier")
    ),
    responses(
        (status = 200, description = "Fresh check-in URL", body = CheckInCodeResponse),
        (status = 303, description = "No session, redirected to login"),
        (status = 403, description = "Forbidden - organizer access required"),
        (status = 500, description = "Secret store failure")
    ),
    tag = "Codes",
    security(("session_cookie" = []), ("bearer_auth" = []))
)]
#[instrument(skip(state, _organizer))]
pub async fn get_checkin_code(
    State(state): State<AppState>,
    _organizer: OrganizerUser,
    Path(class_id): Path<String>,
) -> Result<Json<CheckInCodeResponse>, AppError> {
    let url =
        CodeService::checkin_url(&state.tokens, &state.server_config.base_url, &class_id).await?;
    track_token_issued();

    Ok(Json(CheckInCodeResponse {
        url,
        expires_in: state.tokens.token_expiry(),
    }))
}
