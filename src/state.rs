use std::sync::Arc;

use anyhow::bail;
use aws_config::BehaviorVersion;
use aws_config::meta::region::RegionProviderChain;
use aws_sdk_dynamodb::config::Region;
use tracing::{info, warn};

use rollcall_auth::{
    SecretCache, SecretSource, SecretsManagerSource, StaticSecretSource, TokenService,
};
use rollcall_config::{
    CorsConfig, ServerConfig, SessionConfig, StoreBackend, StoreConfig, TokenConfig,
};
use rollcall_db::{AttendanceStore, init_store};

#[derive(Clone, Debug)]
pub struct AppState {
    pub store: Arc<dyn AttendanceStore>,
    pub tokens: TokenService,
    pub server_config: ServerConfig,
    pub store_config: StoreConfig,
    pub session_config: SessionConfig,
    pub cors_config: CorsConfig,
}

pub async fn load_aws_config(region: &str) -> aws_config::SdkConfig {
    let region_provider =
        RegionProviderChain::default_provider().or_else(Region::new(region.to_string()));

    aws_config::defaults(BehaviorVersion::latest())
        .region(region_provider)
        .load()
        .await
}

/// Refuses the built-in session secret outside the in-memory backend.
pub fn check_session_secret(session: &SessionConfig, store: &StoreConfig) -> anyhow::Result<()> {
    if !session.uses_default_secret() {
        return Ok(());
    }

    match store.backend {
        StoreBackend::Memory => {
            warn!("SESSION_SECRET is not set, sessions are signed with the development default");
            Ok(())
        }
        StoreBackend::DynamoDb => {
            bail!("SESSION_SECRET must be set when STORE_BACKEND is dynamodb")
        }
    }
}

pub async fn init_app_state() -> anyhow::Result<AppState> {
    let server_config = ServerConfig::from_env();
    let token_config = TokenConfig::from_env();
    let store_config = StoreConfig::from_env();
    let session_config = SessionConfig::from_env();

    check_session_secret(&session_config, &store_config)?;

    let sdk_config = load_aws_config(&store_config.aws_region).await;

    let secret_source: Arc<dyn SecretSource> = match &token_config.static_secret {
        Some(secret) => {
            info!("Using signing secret from JWT_SECRET");
            Arc::new(StaticSecretSource::new(secret.clone()))
        }
        None => {
            info!(secret_name = %token_config.secret_name, "Signing secret will be read from Secrets Manager");
            Arc::new(SecretsManagerSource::new(
                aws_sdk_secretsmanager::Client::new(&sdk_config),
                token_config.secret_name.clone(),
                token_config.secret_field.clone(),
            ))
        }
    };

    Ok(AppState {
        store: init_store(&store_config, &sdk_config),
        tokens: TokenService::new(Arc::new(SecretCache::new(secret_source)), token_config),
        server_config,
        store_config,
        session_config,
        cors_config: CorsConfig::from_env(),
    })
}
