use std::time::Duration;

use thiserror::Error;

/// Failures that stop the process before it starts serving requests.
#[derive(Error, Debug)]
pub enum StartupError {
    /// The global tracing subscriber could not be installed.
    #[error("Failed to initialize logger: {0}")]
    Logger(String),

    /// The gateway handshake failed, e.g. because the token was rejected.
    ///
    /// Not retried; the process has to be restarted with a valid configuration.
    #[error("Discord handshake failed: {0}")]
    HandshakeFailed(String),

    /// The session did not become ready within the configured startup timeout.
    #[error("Discord client failed to initialize within {0:?}")]
    ReadyTimeout(Duration),

    /// The session was closed before it became ready.
    #[error("Discord connection closed before becoming ready")]
    ConnectionClosed,
}
