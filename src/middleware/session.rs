use axum::{
    extract::{FromRequestParts, OriginalUri},
    http::{header, request::Parts},
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::extract::cookie::CookieJar;
use tracing::debug;

use rollcall_auth::{Identity, verify_session_token};
use rollcall_core::AppError;

use crate::state::AppState;
use crate::utils::urls::login_redirect;

/// Rejection of the session extractors.
#[derive(Debug)]
pub enum SessionRejection {
    /// No usable session; the visitor is sent to the login flow.
    LoginRequired { location: String },
    Forbidden(AppError),
}

impl IntoResponse for SessionRejection {
    fn into_response(self) -> Response {
        match self {
            SessionRejection::LoginRequired { location } => {
                Redirect::to(&location).into_response()
            }
            SessionRejection::Forbidden(err) => err.into_response(),
        }
    }
}

/// Authenticated participant, read from the identity provider's session.
///
/// The session token is taken from the configured cookie, or from an
/// `Authorization: Bearer` header for API clients.
#[derive(Debug, Clone)]
pub struct SessionUser(pub Identity);

impl SessionUser {
    pub fn email(&self) -> &str {
        &self.0.email
    }
}

fn session_token(parts: &Parts, cookie_name: &str) -> Option<String> {
    let jar = CookieJar::from_headers(&parts.headers);
    if let Some(cookie) = jar.get(cookie_name) {
        return Some(cookie.value().to_string());
    }

    parts
        .headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .map(|token| token.trim().to_string())
}

fn return_path(parts: &Parts) -> String {
    let uri = parts
        .extensions
        .get::<OriginalUri>()
        .map(|original| &original.0)
        .unwrap_or(&parts.uri);

    uri.path_and_query()
        .map(|pq| pq.as_str().to_string())
        .unwrap_or_else(|| "/".to_string())
}

impl FromRequestParts<AppState> for SessionUser {
    type Rejection = SessionRejection;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let config = &state.session_config;

        let identity = session_token(parts, &config.cookie_name)
            .ok_or_else(|| AppError::unauthorized("Missing session"))
            .and_then(|token| verify_session_token(&token, &config.secret));

        match identity {
            Ok(identity) => Ok(SessionUser(identity)),
            Err(err) => {
                debug!(error = %err, "No valid session, redirecting to login");
                Err(SessionRejection::LoginRequired {
                    location: login_redirect(&config.login_url, &return_path(parts)),
                })
            }
        }
    }
}

/// A [`SessionUser`] allowed to view rosters and generate check-in codes.
#[derive(Debug, Clone)]
pub struct OrganizerUser(pub SessionUser);

impl FromRequestParts<AppState> for OrganizerUser {
    type Rejection = SessionRejection;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let user = SessionUser::from_request_parts(parts, state).await?;

        if !state.session_config.is_organizer(user.email()) {
            return Err(SessionRejection::Forbidden(AppError::forbidden(
                "Access denied. Organizer access required",
            )));
        }

        Ok(OrganizerUser(user))
    }
}
