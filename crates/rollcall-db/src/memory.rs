//! Process-local attendance store.
//!
//! Behaves like the table for the service's purposes: one record per
//! `(classId, email)`, overwrite on put, and records past their
//! `validityTimestamp` are purged on access the way the table's TTL would
//! remove them.

use std::collections::BTreeMap;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::sync::RwLock;

use rollcall_core::AppError;
use rollcall_models::AttendanceRecord;

use crate::store::AttendanceStore;

type Key = (String, String);

#[derive(Debug, Default)]
pub struct InMemoryAttendanceStore {
    records: RwLock<BTreeMap<Key, AttendanceRecord>>,
}

impl InMemoryAttendanceStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw lookup of one record, including an expired one not yet purged.
    pub async fn get(&self, class_id: &str, email: &str) -> Option<AttendanceRecord> {
        self.records
            .read()
            .await
            .get(&(class_id.to_string(), email.to_string()))
            .cloned()
    }

    /// Number of stored records, expired ones included.
    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }

    /// Drops every record expired at `now`; returns how many went away.
    pub async fn purge_expired(&self, now: DateTime<Utc>) -> usize {
        let mut records = self.records.write().await;
        let before = records.len();
        records.retain(|_, record| !record.is_expired_at(now));
        before - records.len()
    }
}

#[async_trait]
impl AttendanceStore for InMemoryAttendanceStore {
    async fn put_attendance(&self, record: &AttendanceRecord) -> Result<(), AppError> {
        self.records.write().await.insert(
            (record.class_id.clone(), record.email.clone()),
            record.clone(),
        );
        Ok(())
    }

    async fn class_attendance(&self, class_id: &str) -> Result<Vec<AttendanceRecord>, AppError> {
        self.purge_expired(Utc::now()).await;

        let records = self.records.read().await;
        Ok(records
            .range((class_id.to_string(), String::new())..)
            .take_while(|((record_class, _), _)| record_class == class_id)
            .map(|(_, record)| record.clone())
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn record(class_id: &str, email: &str, at: DateTime<Utc>) -> AttendanceRecord {
        AttendanceRecord::check_in(class_id, email, "{}", at, 86400)
    }

    #[tokio::test]
    async fn test_put_overwrites_same_key() {
        let store = InMemoryAttendanceStore::new();
        let first = Utc::now() - Duration::minutes(2);
        let second = Utc::now();

        store.put_attendance(&record("CS101", "a@x.com", first)).await.unwrap();
        store.put_attendance(&record("CS101", "a@x.com", second)).await.unwrap();

        assert_eq!(store.len().await, 1);
        let stored = store.get("CS101", "a@x.com").await.unwrap();
        assert_eq!(stored.check_in_date, record("CS101", "a@x.com", second).check_in_date);
    }

    #[tokio::test]
    async fn test_class_attendance_only_returns_matching_class() {
        let store = InMemoryAttendanceStore::new();
        let now = Utc::now();
        store.put_attendance(&record("CS101", "a@x.com", now)).await.unwrap();
        store.put_attendance(&record("CS101", "b@x.com", now)).await.unwrap();
        store.put_attendance(&record("CS1010", "c@x.com", now)).await.unwrap();
        store.put_attendance(&record("CS100", "d@x.com", now)).await.unwrap();

        let roster = store.class_attendance("CS101").await.unwrap();
        let emails: Vec<_> = roster.iter().map(|r| r.email.as_str()).collect();
        assert_eq!(emails, vec!["a@x.com", "b@x.com"]);
    }

    #[tokio::test]
    async fn test_unknown_class_is_empty() {
        let store = InMemoryAttendanceStore::new();
        assert!(store.class_attendance("nobody").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_expired_records_are_omitted() {
        let store = InMemoryAttendanceStore::new();
        let written_at = Utc::now() - Duration::seconds(86401);
        store.put_attendance(&record("CS101", "old@x.com", written_at)).await.unwrap();
        store.put_attendance(&record("CS101", "new@x.com", Utc::now())).await.unwrap();

        let roster = store.class_attendance("CS101").await.unwrap();
        assert_eq!(roster.len(), 1);
        assert_eq!(roster[0].email, "new@x.com");
        assert!(store.get("CS101", "old@x.com").await.is_none());
    }
}
