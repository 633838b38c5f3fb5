//! Attendance domain models.
//!
//! [`AttendanceRecord`] is exactly what the attendance table holds, keyed by
//! `(classId, email)`. Attribute names are camelCase on the wire and in the
//! table. `validityTimestamp` is the table's time-to-live attribute: the
//! store drops the item on its own once that instant has passed.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// One participant's check-in for one class.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceRecord {
    /// Partition key
    pub class_id: String,
    /// Sort key
    pub email: String,
    pub attendance: bool,
    /// ISO-8601 instant of the last check-in
    pub check_in_date: String,
    /// Epoch seconds after which the record expires
    pub validity_timestamp: i64,
    /// Serialized identity claims of the participant
    pub login_info: String,
}

impl AttendanceRecord {
    /// Builds the record written when a participant checks in at `now`.
    pub fn check_in(
        class_id: impl Into<String>,
        email: impl Into<String>,
        login_info: impl Into<String>,
        now: DateTime<Utc>,
        retention_seconds: i64,
    ) -> Self {
        Self {
            class_id: class_id.into(),
            email: email.into(),
            attendance: true,
            check_in_date: now.to_rfc3339_opts(SecondsFormat::Millis, true),
            validity_timestamp: now.timestamp() + retention_seconds,
            login_info: login_info.into(),
        }
    }

    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now.timestamp() > self.validity_timestamp
    }

    pub fn to_roster_entry(&self) -> RosterEntry {
        RosterEntry {
            email: self.email.clone(),
            attendance: self.attendance,
            date: self.check_in_date.clone(),
            login_info: self.login_info.clone(),
        }
    }
}

/// Roster projection of an [`AttendanceRecord`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RosterEntry {
    #[schema(example = "a@x.com")]
    pub email: String,
    pub attendance: bool,
    /// Check-in instant (ISO-8601)
    #[schema(example = "2024-03-01T09:01:12.345Z")]
    pub date: String,
    pub login_info: String,
}

/// JSON roster of a class.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RosterResponse {
    #[schema(example = "CS101")]
    pub class_id: String,
    pub count: usize,
    pub entries: Vec<RosterEntry>,
}

impl RosterResponse {
    pub fn new(class_id: impl Into<String>, entries: Vec<RosterEntry>) -> Self {
        Self {
            class_id: class_id.into(),
            count: entries.len(),
            entries,
        }
    }
}
