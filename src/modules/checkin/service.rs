use chrono::{DateTime, Utc};
use tracing::{info, instrument};

use rollcall_auth::{Identity, TokenService};
use rollcall_core::AppError;
use rollcall_db::AttendanceStore;
use rollcall_models::AttendanceRecord;

pub struct CheckInService;

impl CheckInService {
    #[instrument(skip(tokens, store, token, identity), fields(email = %identity.email))]
    pub async fn check_in(
        tokens: &TokenService,
        store: &dyn AttendanceStore,
        token: &str,
        identity: &Identity,
        retention_seconds: i64,
    ) -> Result<AttendanceRecord, AppError> {
        Self::check_in_at(tokens, store, token, identity, retention_seconds, Utc::now()).await
    }

    /// Redeems `token` for `identity` at `now`.
    ///
    /// An invalid or expired token fails with 401 before the store is touched.
    /// A repeat check-in overwrites the participant's previous record.
    #[instrument(skip(tokens, store, token, identity), fields(email = %identity.email))]
    pub async fn check_in_at(
        tokens: &TokenService,
        store: &dyn AttendanceStore,
        token: &str,
        identity: &Identity,
        retention_seconds: i64,
        now: DateTime<Utc>,
    ) -> Result<AttendanceRecord, AppError> {
        let claims = tokens.verify(token).await?;

        let record = AttendanceRecord::check_in(
            claims.class_id,
            identity.email.clone(),
            identity.login_info(),
            now,
            retention_seconds,
        );
        store.put_attendance(&record).await?;

        info!(
            class_id = %record.class_id,
            email = %record.email,
            login_info = %record.login_info,
            "Successful entry"
        );

        Ok(record)
    }
}
