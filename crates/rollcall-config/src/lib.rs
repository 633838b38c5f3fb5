//! # Rollcall Config
//!
//! Configuration types for the Rollcall service, each loaded from
//! environment variables with development-friendly defaults:
//!
//! - [`server`]: public base URL, listen port, page options
//! - [`jwt`]: check-in token signing secret location and lifetime
//! - [`store`]: attendance table, region, retention, backend choice
//! - [`session`]: identity session cookie and organizer allow-list
//! - [`cors`]: allowed cross-origin callers
//!
//! # Example
//!
//! ```ignore
//! use rollcall_config::{ServerConfig, StoreConfig, TokenConfig};
//!
//! let server = ServerConfig::from_env();
//! let tokens = TokenConfig::from_env();
//! let store = StoreConfig::from_env();
//! ```

pub mod cors;
pub mod jwt;
pub mod server;
pub mod session;
pub mod store;

pub use cors::CorsConfig;
pub use jwt::TokenConfig;
pub use server::ServerConfig;
pub use session::{DEFAULT_SESSION_SECRET, SessionConfig};
pub use store::{StoreBackend, StoreConfig};

use std::env;
use std::str::FromStr;

/// Reads `key` and parses it, falling back to `default` when unset or invalid.
pub(crate) fn env_or<T: FromStr>(key: &str, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|s| s.trim().parse().ok())
        .unwrap_or(default)
}

/// Splits a comma separated list, trimming entries and dropping empty ones.
pub fn parse_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}
