//! Signing secret.
//!
//! The check-in signing key lives in a secret store as a JSON document
//! (`{"jwtSecret": "..."}`). It is fetched on first use and then kept for
//! the lifetime of the process; there is no refresh.
//!
//! [`SecretCache`] guarantees a single in-flight fetch: concurrent first
//! callers wait on the same initialization. A failed fetch is not cached, so
//! the next request tries again.

use std::fmt;
use std::sync::Arc;

use anyhow::{Context, anyhow};
use async_trait::async_trait;
use serde_json::Value;
use tokio::sync::OnceCell;
use tracing::{info, instrument};

use rollcall_core::AppError;

/// Somewhere the signing secret can be read from.
#[async_trait]
pub trait SecretSource: Send + Sync {
    async fn fetch_secret(&self) -> anyhow::Result<String>;
}

/// Reads the secret from AWS Secrets Manager.
pub struct SecretsManagerSource {
    client: aws_sdk_secretsmanager::Client,
    secret_id: String,
    field: String,
}

impl SecretsManagerSource {
    pub fn new(
        client: aws_sdk_secretsmanager::Client,
        secret_id: impl Into<String>,
        field: impl Into<String>,
    ) -> Self {
        Self {
            client,
            secret_id: secret_id.into(),
            field: field.into(),
        }
    }
}

#[async_trait]
impl SecretSource for SecretsManagerSource {
    #[instrument(skip(self), fields(secret_id = %self.secret_id))]
    async fn fetch_secret(&self) -> anyhow::Result<String> {
        let response = self
            .client
            .get_secret_value()
            .secret_id(&self.secret_id)
            .send()
            .await
            .with_context(|| format!("Failed to read secret {}", self.secret_id))?;

        let raw = response
            .secret_string()
            .ok_or_else(|| anyhow!("Secret {} has no string value", self.secret_id))?;

        extract_secret_field(raw, &self.field)
    }
}

/// A secret known up front (local development, tests).
pub struct StaticSecretSource {
    secret: String,
}

impl StaticSecretSource {
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
        }
    }
}

#[async_trait]
impl SecretSource for StaticSecretSource {
    async fn fetch_secret(&self) -> anyhow::Result<String> {
        Ok(self.secret.clone())
    }
}

/// Pulls `field` out of a JSON secret document.
pub fn extract_secret_field(raw: &str, field: &str) -> anyhow::Result<String> {
    let document: Value = serde_json::from_str(raw).context("Secret value is not valid JSON")?;

    match document.get(field).and_then(Value::as_str) {
        Some(secret) if !secret.is_empty() => Ok(secret.to_string()),
        Some(_) => Err(anyhow!("Secret field {} is empty", field)),
        None => Err(anyhow!("Secret field {} is missing or not a string", field)),
    }
}

/// Process-wide, lazily fetched signing secret.
pub struct SecretCache {
    source: Arc<dyn SecretSource>,
    secret: OnceCell<String>,
}

impl SecretCache {
    pub fn new(source: Arc<dyn SecretSource>) -> Self {
        Self {
            source,
            secret: OnceCell::new(),
        }
    }

    /// Returns the secret, fetching it if this is the first successful call.
    ///
    /// # Errors
    ///
    /// Returns a store error when the fetch fails. Nothing is cached in that
    /// case.
    pub async fn get(&self) -> Result<&str, AppError> {
        self.secret
            .get_or_try_init(|| async {
                let secret = self.source.fetch_secret().await?;
                info!("Signing secret loaded");
                Ok::<_, anyhow::Error>(secret)
            })
            .await
            .map(String::as_str)
            .map_err(AppError::store)
    }

    pub fn is_loaded(&self) -> bool {
        self.secret.initialized()
    }
}

impl fmt::Debug for SecretCache {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SecretCache")
            .field("loaded", &self.is_loaded())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    struct CountingSource {
        calls: AtomicUsize,
        fail_first: bool,
    }

    #[async_trait]
    impl SecretSource for CountingSource {
        async fn fetch_secret(&self) -> anyhow::Result<String> {
            let call = self.calls.fetch_add(1, Ordering::SeqCst);
            tokio::time::sleep(Duration::from_millis(20)).await;
            if self.fail_first && call == 0 {
                return Err(anyhow!("secret store unavailable"));
            }
            Ok("fetched-secret".to_string())
        }
    }

    #[tokio::test]
    async fn test_concurrent_first_use_fetches_once() {
        let source = Arc::new(CountingSource {
            calls: AtomicUsize::new(0),
            fail_first: false,
        });
        let cache = Arc::new(SecretCache::new(source.clone()));

        let handles: Vec<_> = (0..16)
            .map(|_| {
                let cache = cache.clone();
                tokio::spawn(async move { cache.get().await.map(str::to_string) })
            })
            .collect();

        for handle in handles {
            assert_eq!(handle.await.unwrap().unwrap(), "fetched-secret");
        }
        assert_eq!(source.calls.load(Ordering::SeqCst), 1);
        assert!(cache.is_loaded());
    }

    #[tokio::test]
    async fn test_failed_fetch_is_not_cached() {
        let source = Arc::new(CountingSource {
            calls: AtomicUsize::new(0),
            fail_first: true,
        });
        let cache = SecretCache::new(source.clone());

        let err = cache.get().await.unwrap_err();
        assert_eq!(err.status.as_u16(), 500);
        assert!(!cache.is_loaded());

        assert_eq!(cache.get().await.unwrap(), "fetched-secret");
        assert_eq!(cache.get().await.unwrap(), "fetched-secret");
        assert_eq!(source.calls.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_extract_secret_field() {
        let raw = r#"{"jwtSecret":"abc123","other":"x"}"#;
        assert_eq!(extract_secret_field(raw, "jwtSecret").unwrap(), "abc123");
    }

    #[test]
    fn test_extract_secret_field_rejects_bad_documents() {
        assert!(extract_secret_field("plain-text", "jwtSecret").is_err());
        assert!(extract_secret_field(r#"{"other":"x"}"#, "jwtSecret").is_err());
        assert!(extract_secret_field(r#"{"jwtSecret":42}"#, "jwtSecret").is_err());
        assert!(extract_secret_field(r#"{"jwtSecret":""}"#, "jwtSecret").is_err());
    }

    #[tokio::test]
    async fn test_static_source() {
        let cache = SecretCache::new(Arc::new(StaticSecretSource::new("dev-secret")));
        assert_eq!(cache.get().await.unwrap(), "dev-secret");
    }
}
