use axum::{routing::get, Router};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    model::{
        api::ErrorDto,
        discord::{DiscordUserDto, GuildUsersDto},
        health::{ApiInfoDto, HealthDto},
    },
    server::{
        controller::{
            discord::{self, get_guild_users},
            health::{self, api_info, health_check},
        },
        state::AppState,
    },
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Guild Gateway API",
        description = "REST API to retrieve Discord guild users"
    ),
    paths(
        health::api_info,
        health::health_check,
        discord::get_guild_users,
    ),
    components(schemas(ErrorDto, HealthDto, ApiInfoDto, GuildUsersDto, DiscordUserDto)),
    tags(
        (name = "health", description = "Service information and health"),
        (name = "guild", description = "Guild member lookups"),
    )
)]
pub struct ApiDoc;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(api_info))
        .route("/health", get(health_check))
        .route("/guild/{guild_id}/users", get(get_guild_users))
}

/// Complete application: API routes, documentation and middleware, bound to `state`.
pub fn app(state: AppState) -> Router {
    router()
        .merge(SwaggerUi::new("/docs").url("/openapi.json", ApiDoc::openapi()))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
