use dioxus_logger::tracing;

use crate::server::{
    bot::directory::GuildDirectory,
    error::{lookup::LookupError, upstream::UpstreamError},
    model::discord::{DiscordGuildMember, GuildUsers},
    util::{avatar::AvatarUrls, parse::parse_guild_id},
};

/// Looks up guild members through the Discord session.
///
/// The only caller of the `GuildDirectory` on the request path. Every failure leaves this
/// service as a `LookupError`; raw upstream errors are classified here and nowhere else.
pub struct GuildMemberService<'a> {
    directory: &'a dyn GuildDirectory,
    avatars: &'a AvatarUrls,
}

impl<'a> GuildMemberService<'a> {
    pub fn new(directory: &'a dyn GuildDirectory, avatars: &'a AvatarUrls) -> Self {
        Self { directory, avatars }
    }

    /// Gets all members of a guild keyed by user ID.
    ///
    /// Steps run in order and stop at the first failure: input validation, readiness,
    /// guild resolution, member fetch. Nothing is cached; each call fetches again.
    ///
    /// # Arguments
    /// - `raw_guild_id` - Guild ID exactly as received from the client
    ///
    /// # Returns
    /// - `Ok(GuildUsers)` - Guild identity and every member, normalized
    /// - `Err(LookupError::InvalidInput)` - ID is not a positive 64-bit integer
    /// - `Err(LookupError::ClientNotReady)` - Discord session not ready yet
    /// - `Err(LookupError::GuildNotFound)` - Bot is not in the guild
    /// - `Err(LookupError::PermissionDenied | RateLimited | UpstreamUnavailable)` - Fetch failed
    pub async fn get_guild_users(&self, raw_guild_id: &str) -> Result<GuildUsers, LookupError> {
        let guild_id = parse_guild_id(raw_guild_id)?;

        if !self.directory.is_ready() {
            tracing::error!("Discord client is not ready");
            return Err(LookupError::ClientNotReady);
        }

        let Some(guild) = self.directory.guild(guild_id) else {
            tracing::warn!("Guild {} not found", guild_id);
            return Err(LookupError::GuildNotFound(guild_id.get()));
        };

        tracing::info!(
            "Fetching members for guild: {} ({})",
            guild.name,
            guild.guild_id
        );

        let members = self
            .directory
            .fetch_members(&guild)
            .await
            .map_err(|e| classify_upstream(guild.guild_id, e))?;

        let members = members
            .iter()
            .map(|member| DiscordGuildMember::from_member(member, self.avatars))
            .collect();

        let result = GuildUsers::new(guild.guild_id, guild.name, members);

        tracing::info!(
            "Retrieved {} members from guild {}",
            result.total_members,
            result.guild_name
        );

        Ok(result)
    }
}

/// Classifies a failed member fetch.
///
/// Serenity's ratelimiter waits out and retries 429 responses on its own, so
/// `RateLimited` only surfaces when Discord keeps rejecting after that.
///
/// # Returns
/// - `LookupError::PermissionDenied` - Discord answered 403 (missing access or intent)
/// - `LookupError::RateLimited` - Discord answered 429
/// - `LookupError::UpstreamUnavailable` - Any other status or no response at all
pub fn classify_upstream(guild_id: u64, err: UpstreamError) -> LookupError {
    match err.status() {
        Some(403) => {
            tracing::error!("Permission denied accessing guild {}: {}", guild_id, err);
            LookupError::PermissionDenied {
                guild_id,
                source: err,
            }
        }
        Some(429) => {
            tracing::warn!("Rate limited fetching members of guild {}: {}", guild_id, err);
            LookupError::RateLimited {
                guild_id,
                source: err,
            }
        }
        _ => {
            tracing::error!("Discord API error for guild {}: {}", guild_id, err);
            LookupError::UpstreamUnavailable {
                guild_id,
                source: err,
            }
        }
    }
}
