use std::sync::Arc;

use test_utils::serenity::{create_test_member, member::MemberFactory};

use crate::server::{
    bot::stub::{StubDirectory, StubFetch},
    error::lookup::{LookupError, LookupErrorKind},
    service::discord::GuildMemberService,
    util::avatar::AvatarUrls,
};


const GUILD_ID: u64 = 987654321;

fn avatars() -> AvatarUrls {
    AvatarUrls::new("https://cdn.discordapp.com")
}
