//! Game Data Server Entry Point
//!
//! This is the main entry point for the game data server. It initializes
//! logging, loads configuration, connects the document store, and starts
//! the HTTP listener.

use anyhow::Result;
use tracing::{Level, info};
use tracing_subscriber::{EnvFilter, fmt};

use game_data_server::core::{Config, GameServer, HttpServer, store};

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration from environment
    let config = Config::from_env();

    // Initialize logging
    init_logging(&config.logging.level);

    info!("Starting {} v{}", config.server.name, config.server.version);
    info!("Document store: {}", config.store.description());

    // Connect the document store
    let store = store::connect(&config.store).await?;

    // Create the server state
    let server = GameServer::new(config.clone(), store);

    info!("Server initialized");

    // Create and run the HTTP listener
    let http = HttpServer::new(config.http);
    http.run(server).await?;

    info!("Server shutting down");

    Ok(())
}

/// Initialize the logging subsystem.
///
/// Configures tracing with the specified log level and format.
fn init_logging(level: &str) {
    let level = match level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let filter = EnvFilter::from_default_env().add_directive(level.into());

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .with_writer(std::io::stderr)
        .init();
}
