use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use tracing::{instrument, warn};

use rollcall_core::AppError;
use rollcall_observability::{track_check_in, track_invalid_token};

use crate::middleware::session::SessionUser;
use crate::modules::checkin::service::CheckInService;
use crate::state::AppState;
use crate::views;

pub const CHECK_IN_SUCCESS: &str = "Attendance registered successfully.";
pub const CHECK_IN_INVALID_TOKEN: &str = "Invalid token, try to scan the QR code again.";

#[utoipa::path(
    get,
    path = "/entrypoint/{token}",
    params(
        ("token" = String, Path, description = "Check-in token from the QR code")
    ),
    responses(
        (status = 200, description = "Attendance registered", body = String, content_type = "text/html"),
        (status = 303, description = "No session, redirected to login"),
        (status = 401, description = "Invalid or expired token", body = String, content_type = "text/html"),
        (status = 500, description = "Store or secret failure")
    ),
    tag = "Check-in",
    security(("session_cookie" = []), ("bearer_auth" = []))
)]
#[instrument(skip(state, token, user), fields(email = %user.email()))]
pub async fn check_in(
    State(state): State<AppState>,
    user: SessionUser,
    Path(token): Path<String>,
) -> Result<Response, AppError> {
    let title = &state.server_config.app_title;

    match CheckInService::check_in(
        &state.tokens,
        state.store.as_ref(),
        &token,
        &user.0,
        state.store_config.retention_seconds,
    )
    .await
    {
        Ok(_) => {
            track_check_in();
            Ok(Html(views::info_page(title, CHECK_IN_SUCCESS)).into_response())
        }
        Err(err) if err.is_unauthorized() => {
            track_invalid_token();
            warn!(error = %err, "Rejected check-in token");
            Ok((
                StatusCode::UNAUTHORIZED,
                Html(views::error_page(title, CHECK_IN_INVALID_TOKEN)),
            )
                .into_response())
        }
        Err(err) => Err(err),
    }
}
