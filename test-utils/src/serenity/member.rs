//! Test factory for creating Serenity Member objects.
//!
//! This module provides a builder for mock Serenity `Member` structs. Members are created by
//! deserializing JSON shaped like the "List Guild Members" response, so every value goes
//! through the same parsing Serenity applies to real API data (snowflakes as strings,
//! discriminators as zero-padded strings, image hashes as hex).

use serenity::all::Member;

/// Guild ID assigned to every built member.
pub const DEFAULT_GUILD_ID: u64 = 987654321;

/// Fluent builder for Serenity `Member` test values.
///
/// Starts from a plain human member with no nickname, no avatar, no legacy discriminator
/// and a fixed join timestamp. Override only the fields a test cares about.
///
/// # Examples
///
/// ```rust,ignore
/// use test_utils::serenity::member::MemberFactory;
///
/// let member = MemberFactory::new(123456789, "user")
///     .nick("Nickname")
///     .avatar(Some("abc123"))
///     .discriminator(Some(42))
///     .build();
///
/// assert_eq!(member.nick.as_deref(), Some("Nickname"));
/// ```
pub struct MemberFactory {
    user_id: u64,
    username: String,
    nick: Option<String>,
    global_name: Option<String>,
    avatar: Option<String>,
    discriminator: Option<u16>,
    bot: bool,
    joined_at: Option<String>,
}

impl MemberFactory {
    /// Creates a factory for a member with the given user ID and username.
    pub fn new(user_id: u64, username: &str) -> Self {
        Self {
            user_id,
            username: username.to_string(),
            nick: None,
            global_name: None,
            avatar: None,
            discriminator: None,
            bot: false,
            joined_at: Some("2023-01-15T10:30:00.000000+00:00".to_string()),
        }
    }

    /// Sets the guild-specific nickname.
    pub fn nick(mut self, nick: &str) -> Self {
        self.nick = Some(nick.to_string());
        self
    }

    /// Sets the account-wide display name.
    pub fn global_name(mut self, global_name: &str) -> Self {
        self.global_name = Some(global_name.to_string());
        self
    }

    /// Sets the user avatar hash.
    ///
    /// Short hashes are padded to Discord's 32 character hex format; hashes starting with
    /// `a_` are padded to 34 characters and treated as animated.
    pub fn avatar(mut self, hash: Option<&str>) -> Self {
        self.avatar = hash.map(pad_image_hash);
        self
    }

    /// Sets the legacy discriminator, `None` for migrated usernames.
    pub fn discriminator(mut self, discriminator: Option<u16>) -> Self {
        self.discriminator = discriminator;
        self
    }

    pub fn bot(mut self, bot: bool) -> Self {
        self.bot = bot;
        self
    }

    /// Sets the RFC 3339 join timestamp, `None` when Discord omits it.
    pub fn joined_at(mut self, joined_at: Option<&str>) -> Self {
        self.joined_at = joined_at.map(str::to_string);
        self
    }

    /// Builds the Serenity `Member`.
    ///
    /// # Panics
    /// - If the JSON cannot be deserialized into a Member (indicates invalid test data)
    pub fn build(self) -> Member {
        let discriminator = match self.discriminator {
            Some(value) => format!("{:04}", value),
            None => "0".to_string(),
        };

        serde_json::from_value(serde_json::json!({
            "guild_id": DEFAULT_GUILD_ID.to_string(),
            "user": {
                "id": self.user_id.to_string(),
                "username": self.username,
                "discriminator": discriminator,
                "global_name": self.global_name,
                "avatar": self.avatar,
                "bot": self.bot,
                "public_flags": 0,
            },
            "nick": self.nick,
            "avatar": null,
            "roles": [],
            "joined_at": self.joined_at,
            "premium_since": null,
            "deaf": false,
            "mute": false,
            "flags": 0,
            "pending": false,
            "communication_disabled_until": null,
        }))
        .expect("Failed to create test member - invalid JSON structure")
    }
}

/// Creates a test Serenity Member with default values.
///
/// # Arguments
/// - `user_id` - Discord user ID (snowflake)
/// - `username` - Account username
///
/// # Returns
/// - `Member` - A member of `DEFAULT_GUILD_ID` without nickname or avatar
pub fn create_test_member(user_id: u64, username: &str) -> Member {
    MemberFactory::new(user_id, username).build()
}

fn pad_image_hash(hash: &str) -> String {
    if hash.starts_with("a_") {
        format!("{:0<34}", hash)
    } else {
        format!("{:0<32}", hash)
    }
}
