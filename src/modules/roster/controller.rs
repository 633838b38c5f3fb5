use axum::{
    Json,
    extract::{Path, Query, State},
    response::{Html, Redirect},
};
use tracing::instrument;

use rollcall_core::AppError;
use rollcall_models::{RosterQuery, RosterRedirectForm, RosterResponse};
use rollcall_observability::track_roster_viewed;

use crate::middleware::session::OrganizerUser;
use crate::modules::roster::service::RosterService;
use crate::state::AppState;
use crate::utils::urls::{code_url, roster_path};
use crate::validator::ValidatedForm;
use crate::views;

#[utoipa::path(
    get,
    path = "/registerPage/{class_id}",
    params(
        ("class_id" = String, Path, description = "Class identifier"),
        RosterQuery
    ),
    responses(
        (status = 200, description = "Roster page with the rotating QR code", body = String, content_type = "text/html"),
        (status = 303, description = "No session, redirected to login"),
        (status = 403, description = "Forbidden - organizer access required"),
        (status = 500, description = "Store failure")
    ),
    tag = "Roster",
    security(("session_cookie" = []), ("bearer_auth" = []))
)]
#[instrument(skip(state, _organizer))]
pub async fn register_page(
    State(state): State<AppState>,
    _organizer: OrganizerUser,
    Path(class_id): Path<String>,
    Query(query): Query<RosterQuery>,
) -> Result<Html<String>, AppError> {
    let entries = RosterService::class_roster(state.store.as_ref(), &class_id).await?;
    track_roster_viewed(entries.len());

    let emails: Vec<String> = entries.into_iter().map(|entry| entry.email).collect();
    let refresh = query.refresh_interval(state.server_config.roster_refresh_interval);

    Ok(Html(views::register_page(
        &state.server_config.app_title,
        &class_id,
        &emails,
        &code_url(&state.server_config.base_url, &class_id),
        refresh,
    )))
}

#[utoipa::path(
    post,
    path = "/registerPage",
    request_body(content = RosterRedirectForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 303, description = "Redirect to the class roster page"),
        (status = 400, description = "Malformed form body"),
        (status = 403, description = "Forbidden - organizer access required"),
        (status = 422, description = "Empty class identifier")
    ),
    tag = "Roster",
    security(("session_cookie" = []), ("bearer_auth" = []))
)]
#[instrument(skip(_organizer, form))]
pub async fn redirect_to_register_page(
    _organizer: OrganizerUser,
    ValidatedForm(form): ValidatedForm<RosterRedirectForm>,
) -> Redirect {
    Redirect::to(&roster_path(&form.class_id))
}

#[utoipa::path(
    get,
    path = "/api/classes/{class_id}/roster",
    params(
        ("class_id" = String, Path, description = "Class identifier")
    ),
    responses(
        (status = 200, description = "Class roster", body = RosterResponse),
        (status = 303, description = "No session, redirected to login"),
        (status = 403, description = "Forbidden - organizer access required"),
        (status = 500, description = "Store failure")
    ),
    tag = "Roster",
    security(("session_cookie" = []), ("bearer_auth" = []))
)]
#[instrument(skip(state, _organizer))]
pub async fn get_roster(
    State(state): State<AppState>,
    _organizer: OrganizerUser,
    Path(class_id): Path<String>,
) -> Result<Json<RosterResponse>, AppError> {
    let entries = RosterService::class_roster(state.store.as_ref(), &class_id).await?;
    track_roster_viewed(entries.len());

    Ok(Json(RosterResponse::new(class_id, entries)))
}
