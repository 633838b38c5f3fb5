//! Request extractors for the identity provider's session.
//!
//! - [`session::SessionUser`]: any authenticated participant
//! - [`session::OrganizerUser`]: a participant allowed to view rosters and
//!   generate codes (`ORGANIZER_EMAILS`)
//!
//! Without a valid session both redirect (303) to `LOGIN_URL` with a
//! `returnTo` parameter pointing back at the requested page.
//!
//! ```ignore
//! use crate::middleware::session::SessionUser;
//!
//! async fn check_in(user: SessionUser) -> impl IntoResponse {
//!     let email = user.email();
//!     // ...
//! }
//! ```

pub mod session;
