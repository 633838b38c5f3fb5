pub mod controller;
pub mod router;
pub mod service;

pub use router::{init_code_api_router, init_codes_router};
pub use service::CodeService;
