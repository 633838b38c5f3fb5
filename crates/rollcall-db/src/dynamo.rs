//! DynamoDB attendance table.
//!
//! Table layout: partition key `classId` (S), sort key `email` (S),
//! time-to-live attribute `validityTimestamp` (N). Check-ins are written with
//! `UpdateItem` so a repeat check-in overwrites the previous values in
//! place; the roster is a `Query` on the partition key, following
//! `LastEvaluatedKey` until every page has been read. Items past their
//! `validityTimestamp` are filtered out even if TTL has not removed them yet.

use std::time::Instant;

use anyhow::Context;
use async_trait::async_trait;
use aws_sdk_dynamodb::Client;
use aws_sdk_dynamodb::types::AttributeValue;
use chrono::Utc;
use serde_dynamo::from_items;
use tracing::{debug, instrument};

use rollcall_core::AppError;
use rollcall_models::AttendanceRecord;

use crate::store::AttendanceStore;

const UPDATE_EXPRESSION: &str = "SET attendance = :attendance, validityTimestamp = :validityTimestamp, checkInDate = :checkInDate, loginInfo = :loginInfo";

/// TTL deletion runs in the background and may lag behind expiry, so
/// expired items are filtered out of reads explicitly.
const UNEXPIRED_FILTER: &str = "validityTimestamp >= :now";

#[derive(Clone, Debug)]
pub struct DynamoAttendanceStore {
    client: Client,
    table_name: String,
}

impl DynamoAttendanceStore {
    pub fn new(client: Client, table_name: impl Into<String>) -> Self {
        Self {
            client,
            table_name: table_name.into(),
        }
    }
}

#[async_trait]
impl AttendanceStore for DynamoAttendanceStore {
    #[instrument(skip(self, record), fields(class_id = %record.class_id, email = %record.email))]
    async fn put_attendance(&self, record: &AttendanceRecord) -> Result<(), AppError> {
        let start = Instant::now();

        self.client
            .update_item()
            .table_name(&self.table_name)
            .key("classId", AttributeValue::S(record.class_id.clone()))
            .key("email", AttributeValue::S(record.email.clone()))
            .update_expression(UPDATE_EXPRESSION)
            .expression_attribute_values(":attendance", AttributeValue::Bool(record.attendance))
            .expression_attribute_values(
                ":validityTimestamp",
                AttributeValue::N(record.validity_timestamp.to_string()),
            )
            .expression_attribute_values(
                ":checkInDate",
                AttributeValue::S(record.check_in_date.clone()),
            )
            .expression_attribute_values(":loginInfo", AttributeValue::S(record.login_info.clone()))
            .send()
            .await
            .context("Failed to update attendance")
            .map_err(AppError::store)?;

        debug!(latency_ms = %start.elapsed().as_millis(), "Attendance updated");
        Ok(())
    }

    #[instrument(skip(self))]
    async fn class_attendance(&self, class_id: &str) -> Result<Vec<AttendanceRecord>, AppError> {
        let start = Instant::now();
        let now = Utc::now().timestamp();
        let mut records = Vec::new();
        let mut exclusive_start_key = None;
        let mut pages = 0usize;

        loop {
            let output = self
                .client
                .query()
                .table_name(&self.table_name)
                .key_condition_expression("classId = :classId")
                .filter_expression(UNEXPIRED_FILTER)
                .expression_attribute_values(":classId", AttributeValue::S(class_id.to_string()))
                .expression_attribute_values(":now", AttributeValue::N(now.to_string()))
                .set_exclusive_start_key(exclusive_start_key)
                .send()
                .await
                .context("Failed to query class attendance")
                .map_err(AppError::store)?;
            pages += 1;

            let page: Vec<AttendanceRecord> = from_items(output.items().to_vec())
                .context("Attendance item has an unexpected shape")
                .map_err(AppError::store)?;
            records.extend(page);

            match output.last_evaluated_key() {
                Some(key) if !key.is_empty() => exclusive_start_key = Some(key.clone()),
                _ => break,
            }
        }

        debug!(
            count = records.len(),
            pages,
            latency_ms = %start.elapsed().as_millis(),
            "Class attendance fetched"
        );
        Ok(records)
    }
}
