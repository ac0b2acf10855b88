//! Ready event handlers for session readiness.
//!
//! This module handles the events that complete the gateway handshake. The `ready` event
//! fires once the bot is authenticated, but the guilds it lists arrive afterwards as
//! separate `guild_create` events. Lookups resolve guilds from the cache, so the session
//! is only reported ready once that cache is populated:
//! - Bot in no guilds: ready immediately on the `ready` event
//! - Otherwise: ready on `cache_ready`, after every listed guild was received
//! - Some guild never arrives (Discord outage): ready after `GUILD_STREAM_GRACE`; the
//!   missing guilds resolve as not found until they are cached

use std::sync::Arc;
use std::time::Duration;

use dioxus_logger::tracing;
use serenity::all::{Context, GuildId, Ready};

use crate::server::bot::status::SessionStatus;

/// How long after `ready` to wait for the guild cache before reporting ready anyway.
pub const GUILD_STREAM_GRACE: Duration = Duration::from_secs(5);

/// Handles the ready event when the bot connects to Discord.
///
/// # Arguments
/// - `status` - Shared session status to update
/// - `_ctx` - Discord context (unused)
/// - `ready` - Ready event data containing bot user information and guild list
pub async fn handle_ready(status: &Arc<SessionStatus>, _ctx: Context, ready: Ready) {
    tracing::info!(
        "{} is connected to Discord ({} guilds)",
        ready.user.name,
        ready.guilds.len()
    );

    let identity = ready.user.tag();

    if ready.guilds.is_empty() {
        if status.mark_ready(identity.clone()) {
            tracing::info!("Discord bot ready as {}", identity);
        }
        return;
    }

    let status = status.clone();
    tokio::spawn(async move {
        if status
            .mark_ready_after(identity.clone(), GUILD_STREAM_GRACE)
            .await
        {
            tracing::warn!(
                "Guild cache incomplete after {:?}, Discord bot ready as {}",
                GUILD_STREAM_GRACE,
                identity
            );
        }
    });
}

/// Handles the cache ready event once all guilds from the ready payload are cached.
///
/// # Arguments
/// - `status` - Shared session status to update
/// - `ctx` - Discord context used to read the bot's own user from cache
/// - `guilds` - IDs of the cached guilds
pub async fn handle_cache_ready(status: &SessionStatus, ctx: Context, guilds: Vec<GuildId>) {
    let identity = ctx.cache.current_user().tag();

    tracing::debug!("Guild cache ready with {} guilds", guilds.len());

    if status.mark_ready(identity.clone()) {
        tracing::info!("Discord bot ready as {}", identity);
    }
}
