use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

/// Body of `POST /registerPage`.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct RosterRedirectForm {
    #[serde(rename = "classId")]
    #[validate(length(min = 1, max = 256, message = "classId is required"))]
    #[schema(example = "CS101")]
    pub class_id: String,
}

/// Query parameters of the roster page.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct RosterQuery {
    /// Auto-refresh interval in seconds
    pub refresh: Option<u64>,
}

impl RosterQuery {
    pub const MIN_REFRESH: u64 = 2;
    pub const MAX_REFRESH: u64 = 3600;

    /// Requested refresh interval clamped to a sane range, or `default`.
    pub fn refresh_interval(&self, default: u64) -> u64 {
        self.refresh
            .unwrap_or(default)
            .clamp(Self::MIN_REFRESH, Self::MAX_REFRESH)
    }
}
