use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{model::api::ErrorDto, server::error::upstream::UpstreamError};

/// Classified failure of a guild member lookup.
///
/// The set of variants is closed; every variant maps to exactly one `LookupErrorKind` and
/// one HTTP status code, so the boundary never has to inspect messages.
#[derive(Error, Debug)]
pub enum LookupError {
    /// The raw guild ID is not a positive integer in the snowflake range.
    ///
    /// Detected locally; Discord is never contacted. Results in 400 Bad Request.
    #[error("Guild ID must be a positive integer, got '{0}'")]
    InvalidInput(String),

    /// The Discord session has not completed its handshake.
    ///
    /// Results in 503 Service Unavailable.
    #[error("Discord client is not ready. Please try again later.")]
    ClientNotReady,

    /// The session has no record of the guild.
    ///
    /// Results in 404 Not Found.
    #[error("Guild {0} not found")]
    GuildNotFound(u64),

    /// Discord refused member access (missing permission or privileged intent).
    ///
    /// Results in 403 Forbidden.
    #[error("Bot does not have permission to access guild {guild_id}")]
    PermissionDenied {
        guild_id: u64,
        #[source]
        source: UpstreamError,
    },

    /// Discord throttled the member request.
    ///
    /// Results in 502 Bad Gateway.
    #[error("Discord rate limited the request for guild {guild_id}. Please try again later.")]
    RateLimited {
        guild_id: u64,
        #[source]
        source: UpstreamError,
    },

    /// Any other upstream or network failure.
    ///
    /// Results in 502 Bad Gateway.
    #[error("Discord API error while fetching members of guild {guild_id}. Please try again later.")]
    UpstreamUnavailable {
        guild_id: u64,
        #[source]
        source: UpstreamError,
    },
}

/// Stable identifier of a `LookupError` variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupErrorKind {
    InvalidInput,
    ClientNotReady,
    GuildNotFound,
    PermissionDenied,
    RateLimited,
    UpstreamUnavailable,
}

impl LookupErrorKind {
    /// Snake case name sent to clients in `ErrorDto::kind`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::InvalidInput => "invalid_input",
            Self::ClientNotReady => "client_not_ready",
            Self::GuildNotFound => "guild_not_found",
            Self::PermissionDenied => "permission_denied",
            Self::RateLimited => "rate_limited",
            Self::UpstreamUnavailable => "upstream_unavailable",
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidInput => StatusCode::BAD_REQUEST,
            Self::PermissionDenied => StatusCode::FORBIDDEN,
            Self::GuildNotFound => StatusCode::NOT_FOUND,
            Self::RateLimited | Self::UpstreamUnavailable => StatusCode::BAD_GATEWAY,
            Self::ClientNotReady => StatusCode::SERVICE_UNAVAILABLE,
        }
    }
}

impl LookupError {
    pub fn kind(&self) -> LookupErrorKind {
        match self {
            Self::InvalidInput(_) => LookupErrorKind::InvalidInput,
            Self::ClientNotReady => LookupErrorKind::ClientNotReady,
            Self::GuildNotFound(_) => LookupErrorKind::GuildNotFound,
            Self::PermissionDenied { .. } => LookupErrorKind::PermissionDenied,
            Self::RateLimited { .. } => LookupErrorKind::RateLimited,
            Self::UpstreamUnavailable { .. } => LookupErrorKind::UpstreamUnavailable,
        }
    }
}

/// Converts lookup errors into HTTP responses.
///
/// The status code comes from the error kind; the body carries the display message and
/// the kind name. Upstream sources are never included in the body.
///
/// # Returns
/// - 400 Bad Request - `InvalidInput`
/// - 403 Forbidden - `PermissionDenied`
/// - 404 Not Found - `GuildNotFound`
/// - 502 Bad Gateway - `RateLimited`, `UpstreamUnavailable`
/// - 503 Service Unavailable - `ClientNotReady`
impl IntoResponse for LookupError {
    fn into_response(self) -> Response {
        let kind = self.kind();

        (
            kind.status_code(),
            Json(ErrorDto {
                error: self.to_string(),
                kind: Some(kind.as_str().to_string()),
            }),
        )
            .into_response()
    }
}
