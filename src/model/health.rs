use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, ToSchema, Debug, PartialEq)]
pub struct HealthDto {
    pub status: String,
    pub discord_client_ready: bool,
    /// Bot account tag, or `"Not connected"` before the session is ready.
    pub discord_bot_name: String,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, PartialEq)]
pub struct ApiInfoDto {
    pub name: String,
    pub version: String,
    pub docs_url: String,
    pub openapi_url: String,
}
