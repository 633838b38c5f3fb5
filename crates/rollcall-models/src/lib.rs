//! # Rollcall Models
//!
//! Data structures shared between the store, the services and the HTTP layer.
//!
//! - [`attendance`]: the persisted [`AttendanceRecord`] and its roster projection
//! - [`codes`]: check-in code responses
//! - [`forms`]: request bodies and query parameters

pub mod attendance;
pub mod codes;
pub mod forms;

pub use attendance::{AttendanceRecord, RosterEntry, RosterResponse};
pub use codes::CheckInCodeResponse;
pub use forms::{RosterQuery, RosterRedirectForm};
