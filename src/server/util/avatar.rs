//! Avatar URL construction.
//!
//! Discord serves custom avatars from `/avatars/{user_id}/{hash}` and falls back to a
//! small set of default assets under `/embed/avatars/{index}.png`. The index formula is
//! Discord's convention and is kept in `default_avatar_index` so it can change in one place.

use std::num::NonZeroU16;

use serenity::all::{ImageHash, User};

/// Requested size for custom avatars.
const AVATAR_SIZE: u16 = 1024;

/// Builds avatar URLs against a configurable CDN base.
#[derive(Debug, Clone, PartialEq)]
pub struct AvatarUrls {
    cdn_url: String,
}

impl AvatarUrls {
    /// # Arguments
    /// - `cdn_url` - CDN base without trailing slash, e.g. `https://cdn.discordapp.com`
    pub fn new(cdn_url: impl Into<String>) -> Self {
        Self {
            cdn_url: cdn_url.into(),
        }
    }

    /// Avatar URL for a user: custom avatar if set, otherwise the default asset.
    pub fn for_user(&self, user: &User) -> String {
        match &user.avatar {
            Some(hash) => self.custom(user.id.get(), hash),
            None => self.default_for(user.id.get(), user.discriminator),
        }
    }

    /// URL of a custom avatar; animated hashes are served as GIF.
    pub fn custom(&self, user_id: u64, hash: &ImageHash) -> String {
        let ext = if hash.is_animated() { "gif" } else { "png" };

        format!(
            "{}/avatars/{}/{}.{}?size={}",
            self.cdn_url, user_id, hash, ext, AVATAR_SIZE
        )
    }

    /// URL of the default avatar asset assigned to a user.
    pub fn default_for(&self, user_id: u64, discriminator: Option<NonZeroU16>) -> String {
        format!(
            "{}/embed/avatars/{}.png",
            self.cdn_url,
            default_avatar_index(user_id, discriminator)
        )
    }
}

/// Index of the default avatar asset.
///
/// Accounts on the unique-username system (no discriminator) use `(id >> 22) % 6`; legacy
/// accounts use `discriminator % 5`.
pub fn default_avatar_index(user_id: u64, discriminator: Option<NonZeroU16>) -> u64 {
    match discriminator {
        Some(discriminator) => u64::from(discriminator.get()) % 5,
        None => (user_id >> 22) % 6,
    }
}
