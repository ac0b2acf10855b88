use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Error body returned for every failed request.
#[derive(Serialize, Deserialize, ToSchema, Debug, PartialEq)]
pub struct ErrorDto {
    /// Human-readable description of the failure.
    pub error: String,
    /// Stable, machine-readable error kind such as `guild_not_found`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
}
