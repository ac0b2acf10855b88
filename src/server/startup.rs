use std::time::Duration;

use dioxus_logger::tracing;
use tokio::net::TcpListener;

use crate::server::{
    bot::status::{ConnectionStatus, SessionStatus},
    config::Config,
    error::{startup::StartupError, AppError},
};

/// Installs the global tracing subscriber at the configured level.
///
/// # Returns
/// - `Ok(())` - Logger installed
/// - `Err(AppError::StartupErr)` - A global subscriber was already set
pub fn init_logger(config: &Config) -> Result<(), AppError> {
    dioxus_logger::init(config.log_level).map_err(|e| StartupError::Logger(e.to_string()))?;

    Ok(())
}

/// Waits for the Discord session to finish its handshake.
///
/// A zero timeout skips the wait; the server then starts serving immediately and lookups
/// report `ClientNotReady` until the session is up.
///
/// # Arguments
/// - `status` - Readiness state of the started session
/// - `timeout` - Maximum time to wait
///
/// # Returns
/// - `Ok(())` - Session ready, or waiting disabled
/// - `Err(StartupError::HandshakeFailed)` - Discord rejected the handshake
/// - `Err(StartupError::ReadyTimeout)` - Not ready within `timeout`
/// - `Err(StartupError::ConnectionClosed)` - Session closed before becoming ready
pub async fn wait_for_discord(status: &SessionStatus, timeout: Duration) -> Result<(), AppError> {
    if timeout.is_zero() {
        tracing::info!("Not waiting for Discord client readiness");
        return Ok(());
    }

    match tokio::time::timeout(timeout, status.settled()).await {
        Ok(ConnectionStatus::Ready { identity }) => {
            tracing::info!("Discord client is ready as {}", identity);
            Ok(())
        }
        Ok(ConnectionStatus::Failed { reason }) => Err(StartupError::HandshakeFailed(reason).into()),
        Ok(_) => Err(StartupError::ConnectionClosed.into()),
        Err(_) => Err(StartupError::ReadyTimeout(timeout).into()),
    }
}

/// Binds the HTTP listener to the configured address.
pub async fn bind_listener(config: &Config) -> Result<TcpListener, AppError> {
    let address = config.bind_address();
    let listener = TcpListener::bind(&address).await?;

    tracing::info!("Listening on {}", address);

    Ok(listener)
}

/// Resolves on Ctrl+C or SIGTERM.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install signal handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, initiating graceful shutdown");
        }
        _ = terminate => {
            tracing::info!("Received terminate signal, initiating graceful shutdown");
        }
    }
}
