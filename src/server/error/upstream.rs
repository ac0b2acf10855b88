use thiserror::Error;

/// Raw failure reported by Discord while serving a session-bound request.
///
/// Carries the HTTP status when Discord answered at all; deciding what that status means
/// for the caller is left to the lookup service.
#[derive(Error, Debug)]
pub enum UpstreamError {
    /// Discord answered with a non-success status code.
    #[error("Discord rejected the request with HTTP {status}: {source}")]
    Rejected {
        /// HTTP status code returned by Discord
        status: u16,
        /// The underlying Serenity error
        #[source]
        source: Box<serenity::Error>,
    },

    /// The request failed without a response (network, TLS, decoding, gateway).
    #[error("Discord request failed: {0}")]
    Transport(#[source] Box<serenity::Error>),
}

impl UpstreamError {
    /// HTTP status returned by Discord, if the request got that far.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Rejected { status, .. } => Some(*status),
            Self::Transport(_) => None,
        }
    }
}

impl From<serenity::Error> for UpstreamError {
    fn from(err: serenity::Error) -> Self {
        let status = match &err {
            serenity::Error::Http(http_err) => http_err.status_code().map(|code| code.as_u16()),
            _ => None,
        };

        match status {
            Some(status) => Self::Rejected {
                status,
                source: Box::new(err),
            },
            None => Self::Transport(Box::new(err)),
        }
    }
}
