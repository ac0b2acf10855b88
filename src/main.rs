mod model;
mod server;

use std::sync::Arc;

use dioxus_logger::tracing;

use crate::server::{
    bot, config::Config, error::AppError, router, startup, state::AppState,
    util::avatar::AvatarUrls,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    let config = Config::from_env()?;

    startup::init_logger(&config)?;

    tracing::info!("Starting server");

    // Build the Discord session and begin the gateway handshake in the background
    let connection = Arc::new(bot::start::init_bot(&config).await?);
    connection.start();

    let ready_timeout = config.discord_ready_timeout;
    if let Err(e) = startup::wait_for_discord(connection.session_status(), ready_timeout).await {
        tracing::error!("Discord client failed to initialize: {}", e);
        connection.shutdown().await;
        return Err(e);
    }

    let state = AppState::new(
        connection.clone(),
        AvatarUrls::new(config.discord_cdn_url.clone()),
    );
    let app = router::app(state);

    let listener = startup::bind_listener(&config).await?;

    axum::serve(listener, app)
        .with_graceful_shutdown(startup::shutdown_signal())
        .await?;

    tracing::info!("Shutting down Discord client...");
    connection.shutdown().await;

    Ok(())
}
