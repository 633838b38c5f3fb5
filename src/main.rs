use anyhow::Context;
use dotenvy::dotenv;
use tracing::info;

use rollcall::router::init_router;
use rollcall::state::init_app_state;
use rollcall_observability::{init_metrics, init_tracing, metrics_app};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    init_tracing();

    let state = init_app_state().await?;
    let port = state.server_config.port;
    let base_url = state.server_config.base_url.clone();

    let mut app = init_router(state);
    if let Some(handle) = init_metrics() {
        app = app.merge(metrics_app(handle));
    }

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", port))
        .await
        .with_context(|| format!("Failed to bind port {}", port))?;

    info!(port, base_url = %base_url, "Server running");
    info!("Swagger UI available at {}/swagger-ui", base_url);

    axum::serve(listener, app).await.context("Server error")?;
    Ok(())
}
