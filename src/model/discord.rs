use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A guild member as exposed by the API.
#[derive(Serialize, Deserialize, ToSchema, Debug, PartialEq, Clone)]
#[schema(example = json!({
    "id": 123456789,
    "username": "user",
    "discriminator": "0001",
    "display_name": "User Display Name",
    "avatar_url": "https://cdn.discordapp.com/embed/avatars/1.png",
    "is_bot": false,
    "joined_at": "2023-01-15T10:30:00Z"
}))]
pub struct DiscordUserDto {
    pub id: u64,
    pub username: String,
    pub discriminator: String,
    pub display_name: String,
    pub avatar_url: String,
    pub is_bot: bool,
    pub joined_at: Option<String>,
}

/// All members of a guild keyed by their user ID.
#[derive(Serialize, Deserialize, ToSchema, Debug, PartialEq)]
pub struct GuildUsersDto {
    pub guild_id: u64,
    pub guild_name: String,
    pub total_members: usize,
    pub users: HashMap<String, DiscordUserDto>,
}
