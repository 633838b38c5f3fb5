use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::instrument;

use rollcall_config::TokenConfig;
use rollcall_core::AppError;

use crate::claims::CheckInClaims;
use crate::jwt::{issue_checkin_token_at, verify_checkin_token};
use crate::secret::SecretCache;

/// Issues and verifies check-in tokens with the process-wide secret.
#[derive(Clone, Debug)]
pub struct TokenService {
    secrets: Arc<SecretCache>,
    config: TokenConfig,
}

impl TokenService {
    pub fn new(secrets: Arc<SecretCache>, config: TokenConfig) -> Self {
        Self { secrets, config }
    }

    /// Validity window of issued tokens, in seconds.
    pub fn token_expiry(&self) -> i64 {
        self.config.token_expiry
    }

    #[instrument(skip(self))]
    pub async fn issue(&self, class_id: &str) -> Result<String, AppError> {
        self.issue_at(class_id, Utc::now()).await
    }

    #[instrument(skip(self))]
    pub async fn issue_at(
        &self,
        class_id: &str,
        issued_at: DateTime<Utc>,
    ) -> Result<String, AppError> {
        let secret = self.secrets.get().await?;
        issue_checkin_token_at(class_id, issued_at, secret, &self.config)
    }

    /// Verifies `token`.
    ///
    /// A secret-store failure surfaces as a 500, an unusable token as a 401.
    #[instrument(skip(self, token))]
    pub async fn verify(&self, token: &str) -> Result<CheckInClaims, AppError> {
        let secret = self.secrets.get().await?;
        verify_checkin_token(token, secret)
    }
}
