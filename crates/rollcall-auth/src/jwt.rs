//! JWT utilities.
//!
//! Two kinds of HS256 tokens pass through the service:
//!
//! - **Check-in tokens**: minted for a class, embedded in the QR code and
//!   redeemed at `/entrypoint/{token}`. They expire after
//!   [`TokenConfig::token_expiry`] seconds (5 minutes by default).
//! - **Session tokens**: carry the participant [`Identity`] established by the
//!   identity provider. The service only verifies them; [`create_session_token`]
//!   exists for local tooling and tests.
//!
//! Expiry is checked with zero leeway. Every verification failure (bad
//! signature, expired, malformed) maps to the same unauthorized error, so a
//! caller cannot tell a forged token from an expired one.

use anyhow::anyhow;
use chrono::{DateTime, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};

use rollcall_config::TokenConfig;
use rollcall_core::AppError;

use crate::claims::{CheckInClaims, Identity, SessionClaims};

fn strict_validation() -> Validation {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.leeway = 0;
    validation.validate_aud = false;
    validation
}

/// Creates a check-in token for `class_id`, issued now.
pub fn issue_checkin_token(
    class_id: &str,
    secret: &str,
    config: &TokenConfig,
) -> Result<String, AppError> {
    issue_checkin_token_at(class_id, Utc::now(), secret, config)
}

/// Creates a check-in token for `class_id` as if issued at `issued_at`.
///
/// # Errors
///
/// Returns a bad request error when `class_id` is empty, and an internal
/// error if encoding fails.
pub fn issue_checkin_token_at(
    class_id: &str,
    issued_at: DateTime<Utc>,
    secret: &str,
    config: &TokenConfig,
) -> Result<String, AppError> {
    if class_id.is_empty() {
        return Err(AppError::bad_request(anyhow!("classId must not be empty")));
    }

    let iat = issued_at.timestamp().max(0) as usize;
    let claims = CheckInClaims {
        class_id: class_id.to_string(),
        iat,
        exp: iat + config.token_expiry.max(0) as usize,
    };

    encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|e| AppError::internal_error(format!("Failed to create check-in token: {}", e)))
}

/// Verifies a check-in token and returns its claims.
///
/// # Errors
///
/// Returns an unauthorized error if the signature does not match, the token
/// has expired, or it cannot be decoded.
pub fn verify_checkin_token(token: &str, secret: &str) -> Result<CheckInClaims, AppError> {
    let claims = decode::<CheckInClaims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &strict_validation(),
    )
    .map(|data| data.claims)
    .map_err(|_| AppError::unauthorized("Invalid or expired token"))?;

    if claims.class_id.is_empty() {
        return Err(AppError::unauthorized("Invalid or expired token"));
    }

    Ok(claims)
}

/// Creates a session token for `identity`.
pub fn create_session_token(
    identity: &Identity,
    secret: &str,
    expiry_seconds: i64,
) -> Result<String, AppError> {
    let now = Utc::now().timestamp() as usize;

    let claims = SessionClaims {
        identity: identity.clone(),
        exp: now + expiry_seconds.max(0) as usize,
        iat: now,
    };

    encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|e| AppError::internal_error(format!("Failed to create session token: {}", e)))
}

/// Verifies a session token and returns the identity it carries.
pub fn verify_session_token(token: &str, secret: &str) -> Result<Identity, AppError> {
    decode::<SessionClaims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &strict_validation(),
    )
    .map(|data| data.claims.identity)
    .map_err(|_| AppError::unauthorized("Invalid or expired session"))
}
