pub mod controller;
pub mod router;
pub mod service;

pub use router::{init_roster_api_router, init_roster_router};
pub use service::RosterService;
