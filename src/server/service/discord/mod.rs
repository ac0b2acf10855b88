pub mod guild_member;

pub use guild_member::GuildMemberService;

#[cfg(test)]
mod test;
