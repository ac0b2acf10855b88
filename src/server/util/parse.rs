use serenity::all::GuildId;

use crate::server::error::lookup::LookupError;

/// Parses a raw guild ID from a request path.
///
/// Accepts only positive integers that fit Discord's 64-bit snowflake space.
///
/// # Arguments
/// - `raw` - Unvalidated path segment
///
/// # Returns
/// - `Ok(GuildId)` - Valid, non-zero snowflake
/// - `Err(LookupError::InvalidInput)` - Empty, non-numeric, negative, zero or too large
pub fn parse_guild_id(raw: &str) -> Result<GuildId, LookupError> {
    let id = raw
        .trim()
        .parse::<u64>()
        .map_err(|_| LookupError::InvalidInput(raw.to_string()))?;

    if id == 0 {
        return Err(LookupError::InvalidInput(raw.to_string()));
    }

    Ok(GuildId::new(id))
}
