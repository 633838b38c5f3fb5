//! # Rollcall
//!
//! QR code attendance tracking. An organizer opens the roster page of a
//! class, which shows a QR code that rotates every few seconds. Participants
//! scan it, log in through the identity provider and are recorded as present.
//!
//! ## Flow
//!
//! ```text
//! organizer ── GET /registerPage/{classId} ──▶ roster + <img src=/generateCode/{classId}>
//!                                               │
//!                     QR: {BASE_URL}/entrypoint/{token}   (token valid 5 minutes)
//!                                               │
//! participant ── GET /entrypoint/{token} ──▶ verify token ─▶ upsert (classId, email)
//! ```
//!
//! Attendance records live in a DynamoDB table keyed by `(classId, email)`
//! and expire through the table's TTL 24 hours after the last check-in.
//! Tokens are HS256 JWTs signed with a secret read once from AWS Secrets
//! Manager.
//!
//! ## Architecture
//!
//! ```text
//! crates/
//! ├── rollcall-core/           # AppError
//! ├── rollcall-config/         # env-driven configuration
//! ├── rollcall-auth/           # check-in tokens, sessions, secret cache
//! ├── rollcall-db/             # attendance store (DynamoDB, in-memory)
//! ├── rollcall-models/         # records, roster projections, forms
//! └── rollcall-observability/  # tracing, request logging, Prometheus
//! src/
//! ├── middleware/   # session extractors
//! ├── modules/      # checkin, codes, roster, home
//! ├── utils/        # HTML escaping, URL building
//! └── views.rs      # HTML pages
//! ```
//!
//! Each feature module follows the same structure:
//!
//! - `controller.rs`: HTTP handlers
//! - `service.rs`: business logic
//! - `router.rs`: Axum router configuration
//!
//! ## Environment Variables
//!
//! ```bash
//! BASE_URL=https://attendance.example.com
//! TABLE_NAME=attendance
//! JWT_SECRET_NAME=jwt-secret
//! SESSION_SECRET=shared-with-the-identity-provider
//! ORGANIZER_EMAILS=organizer@example.com
//! ```
//!
//! Set `STORE_BACKEND=memory` and `JWT_SECRET=...` to run without AWS.

pub mod docs;
pub mod middleware;
pub mod modules;
pub mod router;
pub mod state;
pub mod utils;
pub mod validator;
pub mod views;

// Re-export workspace crates for convenience
pub use rollcall_auth;
pub use rollcall_config;
pub use rollcall_core;
pub use rollcall_db;
pub use rollcall_models;
