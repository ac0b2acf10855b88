use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{api::ErrorDto, discord::GuildUsersDto},
    server::{error::AppError, service::discord::GuildMemberService, state::AppState},
};

pub static GUILD_TAG: &str = "guild";

/// Lists every member of a guild the bot is in, keyed by user ID.
#[utoipa::path(
    get,
    path = "/guild/{guild_id}/users",
    tag = GUILD_TAG,
    params(
        ("guild_id" = String, Path, description = "Discord guild ID (snowflake)")
    ),
    responses(
        (status = 200, description = "Successfully retrieved guild members", body = GuildUsersDto),
        (status = 400, description = "Invalid guild ID", body = ErrorDto),
        (status = 403, description = "Bot lacks permission to list members", body = ErrorDto),
        (status = 404, description = "Guild not found", body = ErrorDto),
        (status = 502, description = "Discord API error or rate limit", body = ErrorDto),
        (status = 503, description = "Discord client not ready", body = ErrorDto)
    ),
)]
pub async fn get_guild_users(
    State(state): State<AppState>,
    Path(guild_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let guild_users = GuildMemberService::new(state.directory.as_ref(), &state.avatars)
        .get_guild_users(&guild_id)
        .await?;

    Ok((StatusCode::OK, Json(guild_users.into_dto())))
}
