//! Shared helpers for the HTTP layer.
//!
//! - [`html`]: escaping for rendered pages
//! - [`urls`]: building public URLs from the configured base URL

pub mod html;
pub mod urls;
