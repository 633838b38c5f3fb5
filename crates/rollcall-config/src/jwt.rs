use std::env;

use crate::env_or;

/// Where the check-in signing secret lives and how long tokens stay valid.
#[derive(Clone, Debug)]
pub struct TokenConfig {
    /// Secret identifier in the secret store.
    pub secret_name: String,
    /// JSON field of the stored secret holding the signing key.
    pub secret_field: String,
    /// Signing key supplied directly; skips the secret store when set.
    pub static_secret: Option<String>,
    /// Check-in token lifetime in seconds.
    pub token_expiry: i64,
}

impl TokenConfig {
    pub fn from_env() -> Self {
        Self {
            secret_name: env::var("JWT_SECRET_NAME").unwrap_or_else(|_| "jwt-secret".to_string()),
            secret_field: env::var("JWT_SECRET_FIELD")
                .unwrap_or_else(|_| "jwtSecret".to_string()),
            static_secret: env::var("JWT_SECRET").ok().filter(|s| !s.is_empty()),
            token_expiry: env_or("CHECKIN_TOKEN_EXPIRY", 300), // 5 minutes
        }
    }
}
