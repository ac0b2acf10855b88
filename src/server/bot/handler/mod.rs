use std::sync::Arc;

use serenity::all::{Context, EventHandler, GuildId, Ready};
use serenity::async_trait;

use crate::server::bot::status::SessionStatus;

pub mod ready;

/// Discord bot event handler
///
/// Only the handshake events are handled; the gateway exists to keep an authenticated
/// session and a populated guild cache, not to react to guild activity.
pub struct Handler {
    pub status: Arc<SessionStatus>,
}

impl Handler {
    pub fn new(status: Arc<SessionStatus>) -> Self {
        Self { status }
    }
}

#[async_trait]
impl EventHandler for Handler {
    /// Called when the bot is ready and connected to Discord
    async fn ready(&self, ctx: Context, ready: Ready) {
        ready::handle_ready(&self.status, ctx, ready).await;
    }

    /// Called once every guild listed in the ready payload has been cached
    async fn cache_ready(&self, ctx: Context, guilds: Vec<GuildId>) {
        ready::handle_cache_ready(&self.status, ctx, guilds).await;
    }
}
