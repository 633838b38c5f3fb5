use axum::{
    Router,
    extract::{MatchedPath, Request},
    middleware::Next,
    response::Response,
    routing::get,
};
use metrics::{counter, gauge, histogram};
use metrics_exporter_prometheus::{Matcher, PrometheusBuilder};
use std::time::{Duration, Instant};
use tracing::warn;

pub use metrics_exporter_prometheus::PrometheusHandle;

use crate::logging::is_observability_enabled;

/// Installs the Prometheus recorder and spawns its upkeep task.
///
/// `None` when observability is off or a recorder is already installed.
pub fn init_metrics() -> Option<PrometheusHandle> {
    if !is_observability_enabled() {
        return None;
    }

    let handle = PrometheusBuilder::new()
        .set_buckets_for_metric(
            Matcher::Full("http_request_duration_seconds".to_string()),
            &[
                0.001, 0.005, 0.01, 0.025, 0.05, 0.075, 0.1, 0.25, 0.5, 0.75, 1.0, 2.5, 5.0,
            ],
        )
        .and_then(|builder| builder.install_recorder());

    let handle = match handle {
        Ok(handle) => handle,
        Err(e) => {
            warn!(error = %e, "Failed to install Prometheus recorder, metrics disabled");
            return None;
        }
    };

    let upkeep_handle = handle.clone();
    tokio::spawn(async move {
        loop {
            tokio::time::sleep(Duration::from_secs(5)).await;
            upkeep_handle.run_upkeep();
        }
    });

    Some(handle)
}

/// Records `http_requests_total`, `http_request_duration_seconds` and the
/// `http_requests_active` gauge, labelled by route template.
pub async fn metrics_middleware(req: Request, next: Next) -> Response {
    if !is_observability_enabled() {
        return next.run(req).await;
    }

    let method = req.method().to_string();
    let route = match req.extensions().get::<MatchedPath>() {
        Some(matched) => matched.as_str().to_string(),
        None => "unmatched".to_string(),
    };

    let active = gauge!("http_requests_active");
    active.increment(1.0);
    let start = Instant::now();

    let response = next.run(req).await;

    histogram!("http_request_duration_seconds", "method" => method.clone(), "path" => route.clone())
        .record(start.elapsed().as_secs_f64());
    counter!(
        "http_requests_total",
        "method" => method,
        "path" => route,
        "status" => response.status().as_u16().to_string()
    )
    .increment(1);
    active.decrement(1.0);

    response
}

/// Router exposing `/metrics`
pub fn metrics_app<S>(handle: PrometheusHandle) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new().route("/metrics", get(move || async move { handle.render() }))
}

pub fn track_token_issued() {
    if !is_observability_enabled() {
        return;
    }
    counter!("checkin_tokens_issued_total").increment(1);
}

pub fn track_check_in() {
    if !is_observability_enabled() {
        return;
    }
    counter!("checkins_total", "status" => "success").increment(1);
}

pub fn track_invalid_token() {
    if !is_observability_enabled() {
        return;
    }
    counter!("checkins_total", "status" => "invalid_token").increment(1);
}

pub fn track_roster_viewed(entries: usize) {
    if !is_observability_enabled() {
        return;
    }
    counter!("roster_views_total").increment(1);
    histogram!("roster_size").record(entries as f64);
}
