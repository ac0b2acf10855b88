//! Application state shared across all request handlers.
//!
//! This module defines the `AppState` struct which holds all shared resources and
//! dependencies needed by the application. The state is initialized once during startup
//! and then cloned for each request handler through Axum's state extraction.
//!
//! The state includes:
//! - The Discord session, seen through the `GuildDirectory` capability trait
//! - The avatar URL builder configured with the CDN base

use std::sync::Arc;

use crate::server::{bot::directory::GuildDirectory, util::avatar::AvatarUrls};

/// Application state containing shared resources and dependencies.
///
/// All fields use cheap-to-clone types:
/// - `Arc<dyn GuildDirectory>` is a reference-counted pointer to the one session
/// - `AvatarUrls` only holds the CDN base string
#[derive(Clone)]
pub struct AppState {
    /// The process-wide Discord session.
    ///
    /// Production code injects the `DiscordConnection` built at startup; tests inject a
    /// stub with the same capabilities. No handler creates a session of its own.
    pub directory: Arc<dyn GuildDirectory>,

    /// Builder for custom and default avatar URLs.
    pub avatars: AvatarUrls,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    ///
    /// # Arguments
    /// - `directory` - Discord session shared by every request
    /// - `avatars` - Avatar URL builder
    ///
    /// # Returns
    /// - `AppState` - Initialized application state ready for use
    pub fn new(directory: Arc<dyn GuildDirectory>, avatars: AvatarUrls) -> Self {
        Self { directory, avatars }
    }
}
