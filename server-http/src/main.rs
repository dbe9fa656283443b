use shared::config::Config;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> shared::Result<()> {
    // Load environment variables from .env file (if exists)
    let dotenv = dotenvy::dotenv();

    let config = Config::from_env();

    // RUST_LOG wins over the debug flag
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.default_log_level()));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    info!("Starting CI/CD demo HTTP server...");

    match dotenv {
        Ok(_) => info!("Loaded environment variables from .env file"),
        Err(_) => info!("No .env file found, using system environment variables"),
    }

    if let Some(raw) = &config.rejected_port {
        warn!("DEMO_PORT={:?} is not a valid port, using {}", raw, config.port);
    }
    if config.debug {
        warn!("Debug mode is enabled. Do not run this in production!");
    }

    server_http::serve(&config).await
}
