use tracing::instrument;

use rollcall_core::AppError;
use rollcall_db::AttendanceStore;
use rollcall_models::RosterEntry;

pub struct RosterService;

impl RosterService {
    /// Every check-in recorded for `class_id`, in store order.
    ///
    /// A class nobody checked into yields an empty roster.
    #[instrument(skip(store))]
    pub async fn class_roster(
        store: &dyn AttendanceStore,
        class_id: &str,
    ) -> Result<Vec<RosterEntry>, AppError> {
        let records = store.class_attendance(class_id).await?;
        Ok(records.iter().map(|record| record.to_roster_entry()).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use rollcall_db::InMemoryAttendanceStore;
    use rollcall_models::AttendanceRecord;

    #[tokio::test]
    async fn test_empty_class_has_empty_roster() {
        let store = InMemoryAttendanceStore::new();
        let roster = RosterService::class_roster(&store, "CS101").await.unwrap();
        assert!(roster.is_empty());
    }

    #[tokio::test]
    async fn test_roster_projects_records() {
        let store = InMemoryAttendanceStore::new();
        let record = AttendanceRecord::check_in(
            "CS101",
            "a@x.com",
            r#"{"sub":"auth0|1"}"#,
            Utc::now(),
            86400,
        );
        store.put_attendance(&record).await.unwrap();

        let roster = RosterService::class_roster(&store, "CS101").await.unwrap();
        assert_eq!(roster.len(), 1);
        assert_eq!(roster[0].email, "a@x.com");
        assert!(roster[0].attendance);
        assert_eq!(roster[0].date, record.check_in_date);
        assert_eq!(roster[0].login_info, r#"{"sub":"auth0|1"}"#);
    }
}
