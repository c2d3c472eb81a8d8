//! # Product API Server
//!
//! A small JSON CRUD service over a single `products` table.
//!
//! ## Request path
//! request → trace → CORS → JSON content-type → router → handler → one SQL
//! statement against the shared pool → JSON response

mod config; // Configuration from environment variables
mod db; // Database models and queries
mod error; // Error type and its HTTP mapping
mod extract; // Request body extractors
mod handlers; // HTTP request handlers
mod middleware; // Response header middleware
mod routes; // Route table and middleware stack
mod state; // Shared application state

use crate::config::Config;
use crate::state::AppState;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Main application entry point
///
/// 1. Sets up logging
/// 2. Loads configuration from environment variables
/// 3. Opens the database pool and runs migrations
/// 4. Serves the router until SIGINT/SIGTERM
/// 5. Closes the pool
///
/// Any failure before the server is listening aborts the process.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Default: info level for most crates, debug level for our app
    // Can be overridden with RUST_LOG environment variable
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,product_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;
    tracing::info!("Configuration loaded: {:?}", config);

    let app_state = AppState::new(&config).await?;
    tracing::info!("Database ready at {}", config.database_url);

    let app = routes::router(app_state.clone());

    let bind_addr = config.bind_address();
    tracing::info!("Starting server on {}", bind_addr);

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    app_state.close().await;
    tracing::info!("Shutdown complete");

    Ok(())
}

/// Resolve on Ctrl+C, or SIGTERM on Unix
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("Shutdown signal received, draining connections...");
}
