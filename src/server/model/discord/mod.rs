pub mod guild;
pub mod guild_member;
pub mod guild_users;

pub use guild::DiscordGuild;
pub use guild_member::DiscordGuildMember;
pub use guild_users::GuildUsers;
