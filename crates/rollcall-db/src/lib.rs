//! # Rollcall DB
//!
//! The attendance table and its backends.
//!
//! - [`store`]: the [`AttendanceStore`] trait
//! - [`dynamo`]: DynamoDB-backed store (production)
//! - [`memory`]: process-local store (development, tests)
//!
//! # Example
//!
//! ```ignore
//! use rollcall_config::StoreConfig;
//! use rollcall_db::init_store;
//!
//! let sdk_config = aws_config::load_from_env().await;
//! let store = init_store(&StoreConfig::from_env(), &sdk_config);
//! let roster = store.class_attendance("CS101").await?;
//! ```

use std::sync::Arc;

use tracing::info;

use rollcall_config::{StoreBackend, StoreConfig};

pub mod dynamo;
pub mod memory;
pub mod store;

pub use dynamo::DynamoAttendanceStore;
pub use memory::InMemoryAttendanceStore;
pub use store::AttendanceStore;

/// Builds the store selected by `config.backend`.
pub fn init_store(
    config: &StoreConfig,
    sdk_config: &aws_config::SdkConfig,
) -> Arc<dyn AttendanceStore> {
    info!(backend = %config.backend, table = %config.table_name, "Initializing attendance store");

    match config.backend {
        StoreBackend::DynamoDb => Arc::new(DynamoAttendanceStore::new(
            aws_sdk_dynamodb::Client::new(sdk_config),
            config.table_name.clone(),
        )),
        StoreBackend::Memory => Arc::new(InMemoryAttendanceStore::new()),
    }
}
