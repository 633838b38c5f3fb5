use std::fmt::Debug;

use async_trait::async_trait;

use rollcall_core::AppError;
use rollcall_models::AttendanceRecord;

/// Durable `(classId, email) -> AttendanceRecord` mapping with expiry.
///
/// Implementations must keep at most one record per key; a put overwrites
/// every mutable attribute of an existing record. Expired records
/// (`validityTimestamp` in the past) are removed by the backend itself and
/// must not be returned once gone.
#[async_trait]
pub trait AttendanceStore: Send + Sync + Debug {
    /// Creates or overwrites the record for `(record.class_id, record.email)`.
    async fn put_attendance(&self, record: &AttendanceRecord) -> Result<(), AppError>;

    /// Every live record of `class_id`, in storage order.
    async fn class_attendance(&self, class_id: &str) -> Result<Vec<AttendanceRecord>, AppError>;
}
