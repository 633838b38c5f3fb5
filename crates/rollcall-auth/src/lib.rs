//! # Rollcall Auth
//!
//! Everything that signs or verifies something:
//!
//! - [`claims`]: check-in token claims and the participant [`Identity`]
//! - [`jwt`]: token creation and verification
//! - [`secret`]: the process-wide signing secret and where it comes from
//! - [`service`]: [`TokenService`], issuing and verifying check-in tokens
//!   with the cached secret
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use rollcall_auth::{SecretCache, StaticSecretSource, TokenService};
//! use rollcall_config::TokenConfig;
//!
//! let secrets = Arc::new(SecretCache::new(Arc::new(StaticSecretSource::new("dev-secret"))));
//! let tokens = TokenService::new(secrets, TokenConfig::from_env());
//!
//! let token = tokens.issue("CS101").await?;
//! let claims = tokens.verify(&token).await?;
//! assert_eq!(claims.class_id, "CS101");
//! ```

pub mod claims;
pub mod jwt;
pub mod secret;
pub mod service;

pub use claims::{CheckInClaims, Identity, SessionClaims};
pub use jwt::{
    create_session_token, issue_checkin_token, issue_checkin_token_at, verify_checkin_token,
    verify_session_token,
};
pub use secret::{SecretCache, SecretSource, SecretsManagerSource, StaticSecretSource};
pub use service::TokenService;
