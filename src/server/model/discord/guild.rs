use serenity::all::Guild;

/// Represents a Discord guild resolved from the session cache.
///
/// Only the identity of the guild is copied out of the cache; member data is always
/// fetched fresh through `GuildDirectory::fetch_members`.
#[derive(Debug, Clone, PartialEq)]
pub struct DiscordGuild {
    /// Discord guild ID as a u64.
    pub guild_id: u64,
    /// Guild display name.
    pub name: String,
}

impl DiscordGuild {
    pub fn new(guild_id: u64, name: impl Into<String>) -> Self {
        Self {
            guild_id,
            name: name.into(),
        }
    }

    /// Copies the guild identity out of a cached Serenity guild.
    pub fn from_guild(guild: &Guild) -> Self {
        Self::new(guild.id.get(), guild.name.clone())
    }
}
