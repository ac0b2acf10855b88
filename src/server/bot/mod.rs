//! Discord session management.
//!
//! This module owns the single long-lived Discord bot session the gateway serves every
//! request from. The session is built during startup, its handshake runs in a separate
//! tokio task, and request handlers only ever observe it through the `GuildDirectory`
//! trait: a readiness flag, the bot's identity, cached guild lookup and member fetching.
//!
//! # Gateway Intents
//!
//! The bot requires the following gateway intents:
//! - `GUILDS` - Populate the guild cache used to resolve guild IDs
//! - `GUILD_MEMBERS` - List guild members (privileged intent)
//!
//! Note: `GUILD_MEMBERS` is a privileged intent and must be explicitly enabled
//! in the Discord Developer Portal for the bot application.

pub mod connection;
pub mod directory;
pub mod handler;
pub mod start;
pub mod status;

#[cfg(test)]
pub mod stub;
