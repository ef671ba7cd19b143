//! Lounge API server entry point
//!
//! Run with:
//! ```bash
//! cargo run -p lounge-api
//! ```
//!
//! Configuration is loaded from environment variables.

use lounge_common::{AppConfig, TracingConfig};
use tracing::{error, info};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    if let Err(e) = lounge_common::try_init_tracing(&TracingConfig::default()) {
        eprintln!("Warning: failed to initialize tracing: {e}");
    }

    if let Err(e) = run().await {
        error!(error = %e, "Server failed to start");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    info!("Starting Lounge API server...");

    let config = AppConfig::from_env().map_err(|e| {
        error!(error = %e, "Failed to load configuration");
        e
    })?;

    info!(
        env = ?config.app.env,
        port = config.api.port,
        "Configuration loaded"
    );

    lounge_api::run(config).await?;

    Ok(())
}
