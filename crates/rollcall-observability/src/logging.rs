use axum::{
    extract::{MatchedPath, Request},
    middleware::Next,
    response::Response,
};
use std::fs;
use std::sync::OnceLock;
use std::time::Instant;
use tracing::{error, info, warn};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::basic_logging::init_basic_console_logging;

static OBSERVABILITY_ENABLED: OnceLock<bool> = OnceLock::new();

/// `OBSERVABILITY_ENABLED`, read once. Anything but `false`/`0` counts as on.
pub fn is_observability_enabled() -> bool {
    *OBSERVABILITY_ENABLED.get_or_init(|| match std::env::var("OBSERVABILITY_ENABLED") {
        Ok(value) => !matches!(value.trim().to_lowercase().as_str(), "false" | "0"),
        Err(_) => true,
    })
}

/// Logs one line when a request arrives and one when it completes.
///
/// The completion line is emitted at `warn` for 4xx and `error` for 5xx so
/// that the error log file picks up server failures. Each request gets a
/// fresh `request_id` tying both lines together.
pub async fn logging_middleware(req: Request, next: Next) -> Response {
    let start = Instant::now();
    let method = req.method().clone();
    let route = req
        .extensions()
        .get::<MatchedPath>()
        .map(|p| p.as_str().to_string())
        .unwrap_or_else(|| req.uri().path().to_string());
    let request_id = uuid::Uuid::new_v4();

    info!(%request_id, %method, %route, "Request received");

    let response = next.run(req).await;
    let status = response.status().as_u16();
    let latency_ms = start.elapsed().as_millis() as u64;

    if response.status().is_server_error() {
        error!(%request_id, %method, %route, status, latency_ms, "Request failed");
    } else if response.status().is_client_error() {
        warn!(%request_id, %method, %route, status, latency_ms, "Request rejected");
    } else {
        info!(%request_id, %method, %route, status, latency_ms, "Request handled");
    }

    response
}

/// Installs the global subscriber.
///
/// Console output is filtered by `RUST_LOG` (default `rollcall=info`).
/// Errors also go to a daily-rotated plain log and everything at info and
/// above to a daily-rotated JSON log, both under `LOG_DIR`
/// (default `storage/logs`). When the directory cannot be created the
/// file layers are skipped.
pub fn init_tracing() {
    if !is_observability_enabled() {
        init_basic_console_logging();
        info!("Observability disabled, console logging only");
        return;
    }

    let console_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new("rollcall=info,tower_http=warn,hyper=info,aws_smithy_runtime=warn")
    });
    let console_layer = fmt::layer()
        .compact()
        .with_target(false)
        .with_file(true)
        .with_line_number(true)
        .with_filter(console_filter);

    let log_dir = std::env::var("LOG_DIR").unwrap_or_else(|_| "storage/logs".to_string());
    let dir_error = fs::create_dir_all(&log_dir).err();

    let (error_layer, json_layer) = if dir_error.is_none() {
        let errors = fmt::layer()
            .with_writer(RollingFileAppender::new(Rotation::DAILY, &log_dir, "rollcall.log"))
            .with_ansi(false)
            .with_target(false)
            .with_file(true)
            .with_line_number(true)
            .with_filter(EnvFilter::new("error"));
        let json = fmt::layer()
            .json()
            .with_writer(RollingFileAppender::new(Rotation::DAILY, &log_dir, "rollcall.json"))
            .with_current_span(true)
            .with_span_list(true)
            .with_filter(EnvFilter::new("info"));
        (Some(errors), Some(json))
    } else {
        (None, None)
    };

    tracing_subscriber::registry()
        .with(console_layer)
        .with(error_layer)
        .with(json_layer)
        .init();

    match dir_error {
        None => info!(log_dir = %log_dir, "Tracing initialized with file logging"),
        Some(e) => {
            warn!(log_dir = %log_dir, error = %e, "Log directory unavailable, console logging only")
        }
    }
}
