use chrono::{DateTime, SecondsFormat, Utc};
use serenity::all::Member;

use crate::{model::discord::DiscordUserDto, server::util::avatar::AvatarUrls};

/// A guild member normalized for the API.
///
/// Built fresh from a Serenity `Member` for every request and never stored.
#[derive(Debug, Clone, PartialEq)]
pub struct DiscordGuildMember {
    /// Discord user ID as a u64.
    pub user_id: u64,
    /// Account username.
    pub username: String,
    /// Legacy four digit discriminator, `"0"` for accounts without one.
    pub discriminator: String,
    /// Guild nickname, falling back to the account display name and then the username.
    pub display_name: String,
    /// Custom avatar URL or the default avatar asset URL.
    pub avatar_url: String,
    pub is_bot: bool,
    /// When the user joined the guild, `None` if Discord didn't report it.
    pub joined_at: Option<DateTime<Utc>>,
}

impl DiscordGuildMember {
    /// Normalizes a Serenity member.
    ///
    /// # Arguments
    /// - `member` - Member as returned by Discord
    /// - `avatars` - CDN URL builder used for custom and default avatars
    ///
    /// # Returns
    /// - `DiscordGuildMember` - Normalized member with derived display name and avatar URL
    pub fn from_member(member: &Member, avatars: &AvatarUrls) -> Self {
        let user = &member.user;

        let display_name = member
            .nick
            .clone()
            .or_else(|| user.global_name.clone())
            .unwrap_or_else(|| user.name.clone());

        let discriminator = user
            .discriminator
            .map(|value| format!("{:04}", value.get()))
            .unwrap_or_else(|| "0".to_string());

        let joined_at = member
            .joined_at
            .and_then(|timestamp| DateTime::<Utc>::from_timestamp(timestamp.unix_timestamp(), 0));

        Self {
            user_id: user.id.get(),
            username: user.name.clone(),
            discriminator,
            display_name,
            avatar_url: avatars.for_user(user),
            is_bot: user.bot,
            joined_at,
        }
    }

    pub fn into_dto(self) -> DiscordUserDto {
        DiscordUserDto {
            id: self.user_id,
            username: self.username,
            discriminator: self.discriminator,
            display_name: self.display_name,
            avatar_url: self.avatar_url,
            is_bot: self.is_bot,
            joined_at: self
                .joined_at
                .map(|joined_at| joined_at.to_rfc3339_opts(SecondsFormat::Secs, true)),
        }
    }
}
