use std::sync::Arc;

use dioxus_logger::tracing;
use serenity::all::{Client, GatewayIntents};

use crate::server::{
    bot::{connection::DiscordConnection, handler::Handler, status::SessionStatus},
    config::Config,
    error::AppError,
};

/// Builds the Discord client without connecting it.
///
/// The returned connection is idle; call `DiscordConnection::start` to begin the gateway
/// handshake. Callers must have a validated `Config`, which guarantees a non-empty token.
///
/// # Arguments
/// - `config` - Application configuration holding the bot token
///
/// # Returns
/// - `Ok(DiscordConnection)` - Client built and ready to start
/// - `Err(AppError::DiscordErr)` - Serenity failed to build the client
pub async fn init_bot(config: &Config) -> Result<DiscordConnection, AppError> {
    // Configure gateway intents - what events the bot will receive
    // GUILD_MEMBERS is a privileged intent - must be enabled in Discord Developer Portal
    let intents = GatewayIntents::GUILDS | GatewayIntents::GUILD_MEMBERS;

    let status = Arc::new(SessionStatus::new());
    let handler = Handler::new(status.clone());

    let client = Client::builder(&config.discord_token, intents)
        .event_handler(handler)
        .await?;

    tracing::debug!("Discord client built");

    Ok(DiscordConnection::new(client, status))
}
