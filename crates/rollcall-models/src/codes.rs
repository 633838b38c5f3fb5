use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A freshly issued check-in URL.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CheckInCodeResponse {
    /// URL participants open to check in
    #[schema(example = "https://attendance.example.com/entrypoint/eyJhbGciOiJIUzI1NiJ9...")]
    pub url: String,
    /// Seconds until the embedded token expires
    #[schema(example = 300)]
    pub expires_in: i64,
}
