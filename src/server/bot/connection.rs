//! The process-wide Discord session.
//!
//! `DiscordConnection` owns the one Serenity client for the lifetime of the process. It
//! is built once during startup, shared through `Arc`, and is the only way the rest of
//! the server reaches Discord. Its handles (`Cache`, `Http`, `ShardManager`) are copied
//! out of the client before the client itself is moved into the gateway task, so lookups
//! never contend with the running shard.

use std::sync::{Arc, Mutex, PoisonError};

use dioxus_logger::tracing;
use serenity::all::{GuildId, Member};
use serenity::async_trait;
use serenity::cache::Cache;
use serenity::gateway::ShardManager;
use serenity::http::Http;
use serenity::Client;
use tokio::task::JoinHandle;

use crate::server::{
    bot::{directory::GuildDirectory, status::SessionStatus},
    error::upstream::UpstreamError,
    model::discord::DiscordGuild,
};

/// Maximum number of members to fetch per API request.
static MEMBERS_PER_REQUEST: u64 = 1000;

pub struct DiscordConnection {
    status: Arc<SessionStatus>,
    /// Present until `start` moves it into the gateway task.
    client: Mutex<Option<Client>>,
    runner: Mutex<Option<JoinHandle<()>>>,
    cache: Arc<Cache>,
    http: Arc<Http>,
    shard_manager: Arc<ShardManager>,
}

impl DiscordConnection {
    /// Wraps a built but not yet started Serenity client.
    ///
    /// # Arguments
    /// - `client` - Client whose event handler reports into `status`
    /// - `status` - Readiness state shared with the event handler
    pub fn new(client: Client, status: Arc<SessionStatus>) -> Self {
        Self {
            status,
            cache: client.cache.clone(),
            http: client.http.clone(),
            shard_manager: client.shard_manager.clone(),
            client: Mutex::new(Some(client)),
            runner: Mutex::new(None),
        }
    }

    /// Starts the gateway handshake in a background task.
    ///
    /// Returns immediately. Calling it again after the first call does nothing. When the
    /// handshake fails (invalid token, disallowed intents) the status becomes `Failed`
    /// and stays that way; nothing here retries.
    pub fn start(&self) {
        if !self.status.begin_connecting() {
            tracing::debug!("Discord client already started");
            return;
        }

        let Some(mut client) = self
            .client
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take()
        else {
            return;
        };

        let status = self.status.clone();
        let runner = tokio::spawn(async move {
            tracing::info!("Starting Discord client...");

            // Runs until every shard shuts down
            match client.start().await {
                Ok(()) => {
                    tracing::info!("Discord client stopped");
                    status.mark_closed();
                }
                Err(e) => {
                    tracing::error!("Discord client error: {}", e);
                    if !status.mark_failed(e.to_string()) {
                        status.mark_closed();
                    }
                }
            }
        });

        *self.runner.lock().unwrap_or_else(PoisonError::into_inner) = Some(runner);
    }

    /// Readiness state shared with the gateway event handler.
    pub fn session_status(&self) -> &SessionStatus {
        &self.status
    }

    /// Closes every shard and waits for the gateway task to finish.
    pub async fn shutdown(&self) {
        self.shard_manager.shutdown_all().await;

        let runner = self
            .runner
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take();

        if let Some(runner) = runner {
            if let Err(e) = runner.await {
                tracing::error!("Discord client task failed: {}", e);
            }
        }

        self.status.mark_closed();
        tracing::info!("Discord client closed");
    }
}

#[async_trait]
impl GuildDirectory for DiscordConnection {
    fn is_ready(&self) -> bool {
        self.status.is_ready()
    }

    fn identity_label(&self) -> Option<String> {
        self.status.identity()
    }

    fn guild(&self, guild_id: GuildId) -> Option<DiscordGuild> {
        // The cache reference must not outlive this call
        self.cache
            .guild(guild_id)
            .map(|guild| DiscordGuild::from_guild(&guild))
    }

    async fn fetch_members(&self, guild: &DiscordGuild) -> Result<Vec<Member>, UpstreamError> {
        let guild_id = GuildId::new(guild.guild_id);

        // Fetch ALL members from Discord API with pagination
        // This requires the GUILD_MEMBERS privileged intent
        let mut all_members = Vec::new();
        let mut after: Option<u64> = None;

        loop {
            let members = self
                .http
                .get_guild_members(guild_id, Some(MEMBERS_PER_REQUEST), after)
                .await?;

            if members.is_empty() {
                break;
            }

            tracing::debug!(
                "Fetched {} members from Discord API for guild {} (total so far: {})",
                members.len(),
                guild.guild_id,
                all_members.len() + members.len()
            );

            after = members.last().map(|m| m.user.id.get());

            let fetched_count = members.len();
            all_members.extend(members);

            // If we got less than the maximum, we've reached the end
            if fetched_count < MEMBERS_PER_REQUEST as usize {
                break;
            }
        }

        Ok(all_members)
    }
}
