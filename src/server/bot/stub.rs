//! In-memory `GuildDirectory` for tests.
//!
//! Stands in for `DiscordConnection` so the lookup service and controllers can be tested
//! without a gateway connection. Every guild carries a scripted fetch outcome, and can be
//! gated on a `Notify` to hold its fetch in flight.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use serenity::all::{GuildId, Member};
use serenity::async_trait;
use tokio::sync::Notify;

use crate::server::{
    bot::directory::GuildDirectory, error::upstream::UpstreamError, model::discord::DiscordGuild,
};

/// Scripted result of `fetch_members` for one guild.
pub enum StubFetch {
    Members(Vec<Member>),
    /// Discord answers with this HTTP status.
    Reject(u16),
    /// The request fails without a response.
    Transport,
}

struct StubGuild {
    guild: DiscordGuild,
    fetch: StubFetch,
    gate: Option<Arc<Notify>>,
}

pub struct StubDirectory {
    ready: bool,
    identity: Option<String>,
    guilds: HashMap<u64, StubGuild>,
    calls: AtomicUsize,
}

impl StubDirectory {
    /// A ready session identifying as `gateway#0001` with no guilds.
    pub fn ready() -> Self {
        Self {
            ready: true,
            identity: Some("gateway#0001".to_string()),
            guilds: HashMap::new(),
            calls: AtomicUsize::new(0),
        }
    }

    /// A session whose handshake has not completed.
    pub fn not_ready() -> Self {
        Self {
            ready: false,
            identity: None,
            ..Self::ready()
        }
    }

    pub fn with_guild(self, guild_id: u64, name: &str, members: Vec<Member>) -> Self {
        self.with_fetch(guild_id, name, StubFetch::Members(members), None)
    }

    pub fn with_failing_guild(self, guild_id: u64, name: &str, fetch: StubFetch) -> Self {
        self.with_fetch(guild_id, name, fetch, None)
    }

    /// Adds a guild whose fetch only completes after `gate` is notified.
    pub fn with_gated_guild(
        self,
        guild_id: u64,
        name: &str,
        members: Vec<Member>,
        gate: Arc<Notify>,
    ) -> Self {
        self.with_fetch(guild_id, name, StubFetch::Members(members), Some(gate))
    }

    fn with_fetch(
        mut self,
        guild_id: u64,
        name: &str,
        fetch: StubFetch,
        gate: Option<Arc<Notify>>,
    ) -> Self {
        self.guilds.insert(
            guild_id,
            StubGuild {
                guild: DiscordGuild::new(guild_id, name),
                fetch,
                gate,
            },
        );
        self
    }

    /// Number of guild resolutions and member fetches made so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl GuildDirectory for StubDirectory {
    fn is_ready(&self) -> bool {
        self.ready
    }

    fn identity_label(&self) -> Option<String> {
        self.identity.clone()
    }

    fn guild(&self, guild_id: GuildId) -> Option<DiscordGuild> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.guilds
            .get(&guild_id.get())
            .map(|stub| stub.guild.clone())
    }

    async fn fetch_members(&self, guild: &DiscordGuild) -> Result<Vec<Member>, UpstreamError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        let Some(stub) = self.guilds.get(&guild.guild_id) else {
            return Err(UpstreamError::Rejected {
                status: 404,
                source: Box::new(serenity::Error::Other("Unknown Guild")),
            });
        };

        if let Some(gate) = &stub.gate {
            gate.notified().await;
        }

        match &stub.fetch {
            StubFetch::Members(members) => Ok(members.clone()),
            StubFetch::Reject(status) => Err(UpstreamError::Rejected {
                status: *status,
                source: Box::new(serenity::Error::Other("Rejected by stub")),
            }),
            StubFetch::Transport => Err(UpstreamError::Transport(Box::new(
                serenity::Error::Other("Connection reset"),
            ))),
        }
    }
}
