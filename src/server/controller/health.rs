use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::health::{ApiInfoDto, HealthDto},
    server::state::AppState,
};

pub static HEALTH_TAG: &str = "health";

/// Reports API liveness and Discord session readiness.
#[utoipa::path(
    get,
    path = "/health",
    tag = HEALTH_TAG,
    responses(
        (status = 200, description = "API is up", body = HealthDto)
    ),
)]
pub async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    let dto = HealthDto {
        status: "ok".to_string(),
        discord_client_ready: state.directory.is_ready(),
        discord_bot_name: state
            .directory
            .identity_label()
            .unwrap_or_else(|| "Not connected".to_string()),
    };

    (StatusCode::OK, Json(dto))
}

/// API name, version and documentation links.
#[utoipa::path(
    get,
    path = "/",
    tag = HEALTH_TAG,
    responses(
        (status = 200, description = "API information", body = ApiInfoDto)
    ),
)]
pub async fn api_info() -> impl IntoResponse {
    Json(ApiInfoDto {
        name: "Guild Gateway API".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        docs_url: "/docs".to_string(),
        openapi_url: "/openapi.json".to_string(),
    })
}
