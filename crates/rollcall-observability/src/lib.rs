//! Rollcall observability.
//!
//! - Structured logging via `tracing` (console, rolling files, JSON)
//! - HTTP request logging middleware
//! - Prometheus metrics and business counters
//!
//! Observability is on by default and can be switched off at runtime with
//! `OBSERVABILITY_ENABLED=false`, which falls back to plain console logging
//! and disables metrics.
//!
//! # Examples
//!
//! ```no_run
//! use rollcall_observability::{init_metrics, init_tracing};
//!
//! #[tokio::main]
//! async fn main() {
//!     init_tracing();
//!     let _metrics = init_metrics();
//! }
//! ```

pub mod basic_logging;
pub mod logging;
pub mod metrics;

pub use basic_logging::init_basic_console_logging;
pub use logging::{init_tracing, is_observability_enabled, logging_middleware};
pub use metrics::{
    PrometheusHandle, init_metrics, metrics_app, metrics_middleware, track_check_in,
    track_invalid_token, track_roster_viewed, track_token_issued,
};
