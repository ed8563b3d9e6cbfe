//! PDF Library Server
//!
//! Serves the section grid, upload form and page viewer over HTTP.

use std::net::SocketAddr;

use anyhow::Context;
use tokio::signal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use pdf_library_server::config::Config;
use pdf_library_server::routes;
use pdf_library_server::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env before the filter reads RUST_LOG
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| "pdf_library_server=debug,tower_http=debug".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env();

    tracing::info!("Starting PDF Library Server v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!("Library directory: {}", config.library.base_dir.display());
    tracing::info!("Sections: {}", config.library.sections.len());

    let host = config.server.host.clone();
    let port = config.server.port;

    // Create application state (also creates section folders)
    let app_state = AppState::new(config).with_context(|| "Failed to create section folders")?;
    let capability = app_state.capability();
    if capability.is_available() {
        tracing::info!("Page rendering enabled");
    } else {
        tracing::warn!(
            "Page rendering unavailable ({}); upload, list, download and delete still work",
            capability.as_str()
        );
    }

    let app = routes::app(app_state);

    // Start server with graceful shutdown
    let listener = tokio::net::TcpListener::bind((host.as_str(), port))
        .await
        .with_context(|| format!("Failed to bind {}:{}", host, port))?;
    let addr: SocketAddr = listener.local_addr()?;
    tracing::info!("PDF Library Server listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

/// Graceful shutdown signal handler
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
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
            tracing::info!("Received Ctrl+C, starting graceful shutdown...");
        },
        _ = terminate => {
            tracing::info!("Received SIGTERM, starting graceful shutdown...");
        },
    }
}
