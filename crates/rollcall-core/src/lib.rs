//! # Rollcall Core
//!
//! Foundational types shared by every Rollcall crate.
//!
//! - [`errors`]: the application error type and its HTTP conversion
//!
//! # Example
//!
//! ```ignore
//! use rollcall_core::AppError;
//!
//! fn lookup(class_id: &str) -> Result<(), AppError> {
//!     if class_id.is_empty() {
//!         return Err(AppError::bad_request(anyhow::anyhow!("classId is required")));
//!     }
//!     Ok(())
//! }
//! ```

pub mod errors;

pub use errors::{AppError, ErrorResponse};
