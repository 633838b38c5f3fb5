//! JWT claim structures.
//!
//! - [`CheckInClaims`]: what a check-in token binds (a class)
//! - [`Identity`]: the participant as described by the identity provider
//! - [`SessionClaims`]: an [`Identity`] wrapped with session timestamps

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Claims carried by a check-in token.
///
/// Tokens are only ever minted for one class and live for a few minutes.
/// Nothing prevents redeeming the same token several times inside that window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckInClaims {
    #[serde(rename = "classId")]
    pub class_id: String,
    /// Token issued-at timestamp (Unix timestamp)
    pub iat: usize,
    /// Token expiration timestamp (Unix timestamp)
    pub exp: usize,
}

/// Authenticated participant.
///
/// Mirrors the OIDC user-info claims. `email` is the only claim the service
/// relies on; the rest is kept so it can be stored as login metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Identity {
    pub sub: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nickname: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub picture: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email_verified: Option<bool>,
    /// Any further provider claims, retained verbatim.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Identity {
    pub fn new(sub: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            sub: sub.into(),
            email: email.into(),
            name: None,
            nickname: None,
            picture: None,
            email_verified: None,
            extra: Map::new(),
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Serialized form stored alongside an attendance record.
    pub fn login_info(&self) -> String {
        // Serializing a struct of strings, bools and JSON values cannot fail.
        serde_json::to_string(self).unwrap_or_default()
    }
}

/// Claims of the session token handed over by the identity provider.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionClaims {
    #[serde(flatten)]
    pub identity: Identity,
    /// Token expiration timestamp (Unix timestamp)
    pub exp: usize,
    /// Token issued-at timestamp (Unix timestamp)
    pub iat: usize,
}
