//! Session configuration.
//!
//! Participants log in through an external identity provider, which leaves
//! a signed session token in a cookie. These settings tell the service how
//! to read that cookie and where to send visitors who do not have one.
//!
//! - `SESSION_SECRET`: HS256 key the session token is signed with
//! - `SESSION_COOKIE`: cookie name (default: `appSession`)
//! - `LOGIN_URL`: where unauthenticated visitors are redirected (default: `/login`)
//! - `ORGANIZER_EMAILS`: comma separated emails allowed to view rosters and
//!   generate codes; empty means every authenticated user

use std::env;

use crate::{env_or, parse_list};

/// Development fallback for `SESSION_SECRET`; anyone can forge sessions with it.
pub const DEFAULT_SESSION_SECRET: &str = "your-session-secret-change-in-production";

#[derive(Clone, Debug)]
pub struct SessionConfig {
    pub secret: String,
    pub cookie_name: String,
    pub login_url: String,
    pub organizer_emails: Vec<String>,
    /// Lifetime of session tokens minted locally (CLI, tests), in seconds.
    pub session_expiry: i64,
}

impl SessionConfig {
    pub fn from_env() -> Self {
        Self {
            secret: env::var("SESSION_SECRET")
                .ok()
                .filter(|secret| !secret.is_empty())
                .unwrap_or_else(|| DEFAULT_SESSION_SECRET.to_string()),
            cookie_name: env::var("SESSION_COOKIE").unwrap_or_else(|_| "appSession".to_string()),
            login_url: env::var("LOGIN_URL").unwrap_or_else(|_| "/login".to_string()),
            organizer_emails: parse_list(&env::var("ORGANIZER_EMAILS").unwrap_or_default())
                .into_iter()
                .map(|email| email.to_lowercase())
                .collect(),
            session_expiry: env_or("SESSION_EXPIRY", 86400), // 24 hours
        }
    }

    pub fn uses_default_secret(&self) -> bool {
        self.secret == DEFAULT_SESSION_SECRET
    }

    /// Whether `email` may view rosters and generate check-in codes.
    pub fn is_organizer(&self, email: &str) -> bool {
        self.organizer_emails.is_empty()
            || self
                .organizer_emails
                .iter()
                .any(|allowed| allowed.eq_ignore_ascii_case(email))
    }
}
