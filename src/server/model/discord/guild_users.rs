use std::collections::HashMap;

use crate::{model::discord::GuildUsersDto, server::model::discord::DiscordGuildMember};

/// Result of a successful guild member lookup.
#[derive(Debug, Clone, PartialEq)]
pub struct GuildUsers {
    pub guild_id: u64,
    pub guild_name: String,
    pub total_members: usize,
    /// Members keyed by the string form of their user ID.
    pub users: HashMap<String, DiscordGuildMember>,
}

impl GuildUsers {
    /// Builds the result from normalized members.
    ///
    /// Keys are `user_id.to_string()`; a member listed twice by Discord is kept once, so
    /// `total_members` always equals the number of keys.
    pub fn new(guild_id: u64, guild_name: String, members: Vec<DiscordGuildMember>) -> Self {
        let users: HashMap<String, DiscordGuildMember> = members
            .into_iter()
            .map(|member| (member.user_id.to_string(), member))
            .collect();

        Self {
            guild_id,
            guild_name,
            total_members: users.len(),
            users,
        }
    }

    pub fn into_dto(self) -> GuildUsersDto {
        GuildUsersDto {
            guild_id: self.guild_id,
            guild_name: self.guild_name,
            total_members: self.total_members,
            users: self
                .users
                .into_iter()
                .map(|(id, member)| (id, member.into_dto()))
                .collect(),
        }
    }
}
