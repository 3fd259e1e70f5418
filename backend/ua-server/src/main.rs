use ua_server::error::ServerError;
use ua_server::logger::{self, LogTarget};
use ua_server::{AppState, build_router};

use ua_config::Config;
use ua_db::{Database, RetryPolicy, UserRepository};

use std::error::Error;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use log::{error, info};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Load .env file if present (development)
    let _ = dotenvy::dotenv();

    // Load and validate configuration
    let config = Config::load()?;
    config.validate()?;

    // Initialize logger (before any other logging)
    logger::initialize(
        config.logging.level,
        LogTarget::from_config(config.log_file_path()?, config.logging.colored),
    )?;

    info!("Starting ua-server v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    // Open database (bounded retry, then migrations)
    let retry = RetryPolicy::new(
        config.database.connect_attempts,
        Duration::from_millis(config.database.connect_delay_ms),
    );
    let database = Database::open(
        &config.database_url()?,
        config.database.max_connections,
        &retry,
    )
    .await
    .map_err(ServerError::from)?;

    // Build application state and router
    let store = Arc::new(UserRepository::new(database.pool().clone()));
    let app = build_router(AppState::new(store));

    // Create TCP listener
    let bind_addr = config.bind_addr();
    let listener = TcpListener::bind(&bind_addr)
        .await
        .map_err(|source| ServerError::Bind {
            addr: bind_addr.clone(),
            source,
        })?;

    // Get actual bound address (important when port is 0 / auto-assigned)
    let actual_addr = listener.local_addr()?;
    info!("Server listening on {}", actual_addr);

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await
    .map_err(|source| ServerError::Serve { source })?;

    database.close().await;
    info!("Graceful shutdown complete");

    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Received SIGINT (Ctrl+C), initiating graceful shutdown"),
        Err(e) => {
            error!("Failed to listen for SIGINT: {}", e);
            // Without a signal handler, run until killed
            std::future::pending::<()>().await;
        }
    }
}
