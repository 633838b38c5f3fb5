use std::env;

use crate::env_or;

#[derive(Clone, Debug)]
pub struct ServerConfig {
    /// Public URL the service is reachable at, without a trailing slash.
    pub base_url: String,
    pub port: u16,
    /// Default auto-refresh interval of the roster page, in seconds.
    pub roster_refresh_interval: u64,
    pub app_title: String,
}

impl ServerConfig {
    pub fn from_env() -> Self {
        Self {
            base_url: normalize_base_url(
                &env::var("BASE_URL").unwrap_or_else(|_| "http://localhost:3000".to_string()),
            ),
            port: env_or("PORT", 3000),
            roster_refresh_interval: env_or("ROSTER_REFRESH_INTERVAL", 10),
            app_title: env::var("APP_TITLE")
                .unwrap_or_else(|_| "Simple Attendance System".to_string()),
        }
    }
}

pub fn normalize_base_url(raw: &str) -> String {
    raw.trim().trim_end_matches('/').to_string()
}
