pub mod controller;
pub mod router;
pub mod service;

pub use router::init_checkin_router;
pub use service::CheckInService;
