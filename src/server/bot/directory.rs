//! Capability surface of the Discord session.
//!
//! The lookup service only ever talks to Discord through `GuildDirectory`. The production
//! implementation is `DiscordConnection`; tests inject a stub with the same surface.

use serenity::all::{GuildId, Member};
use serenity::async_trait;

use crate::server::{error::upstream::UpstreamError, model::discord::DiscordGuild};

#[async_trait]
pub trait GuildDirectory: Send + Sync {
    /// Whether the session finished its handshake. Never blocks.
    fn is_ready(&self) -> bool;

    /// Tag of the connected bot account, `None` until ready.
    fn identity_label(&self) -> Option<String>;

    /// Resolves a guild the session is a member of.
    ///
    /// # Returns
    /// - `Some(DiscordGuild)` - Guild present in the session's guild cache
    /// - `None` - Bot is not in the guild or the guild is not cached
    fn guild(&self, guild_id: GuildId) -> Option<DiscordGuild>;

    /// Retrieves every member of the guild in a single all-or-nothing call.
    ///
    /// Not retried; each call is one attempt and the caller decides what to do on failure.
    ///
    /// # Returns
    /// - `Ok(Vec<Member>)` - Complete member list
    /// - `Err(UpstreamError)` - Raw Discord failure, unclassified
    async fn fetch_members(&self, guild: &DiscordGuild) -> Result<Vec<Member>, UpstreamError>;
}
