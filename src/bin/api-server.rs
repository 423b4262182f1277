//! Sigscan API Server
//!
//! Stateless HTTP API exposing the signal engine, health check and
//! metrics. Can be horizontally scaled; the scanner worker runs as a
//! separate process.

use dotenvy::dotenv;
use sigscan::config::Settings;
use sigscan::core::http::start_server;
use sigscan::logging;
use tokio::signal;
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv().ok();
    logging::init_logging();

    let settings = Settings::from_env();
    info!("Starting Sigscan API Server");
    info!(environment = %settings.environment, "Environment");
    info!(port = settings.port, "HTTP Server: http://0.0.0.0:{}", settings.port);

    let port = settings.port;
    let server_handle = tokio::spawn(async move {
        if let Err(e) = start_server(port).await {
            error!(error = %e, "HTTP server error");
        }
    });

    info!("API server started, waiting for shutdown signal...");
    tokio::select! {
        _ = signal::ctrl_c() => {
            info!("Shutting down API server...");
        }
        _ = server_handle => {
            error!("HTTP server stopped");
        }
    }

    Ok(())
}
