//! MCP Server Entry Point
//!
//! Loads configuration, initializes logging and serves the Lokalise tools on
//! stdin/stdout until the client disconnects or Ctrl-C is pressed.

use anyhow::Result;
use tracing::{Level, info};
use tracing_subscriber::{EnvFilter, fmt};

use lokalise_mcp_server::core::{Config, McpServer, serve_stdio};

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration from environment
    let config = Config::from_env();

    // Initialize logging
    init_logging(&config.logging.level);

    info!("Starting {} v{}", config.server.name, config.server.version);
    config.log_summary();
    config.validate()?;

    // Create the MCP server
    let server = McpServer::new(config)?;

    info!("Server initialized");

    tokio::select! {
        result = serve_stdio(server) => result?,
        _ = tokio::signal::ctrl_c() => info!("Interrupt received"),
    }

    info!("Server shutting down");

    Ok(())
}

/// Initialize the logging subsystem.
///
/// Logs go to stderr; stdout carries the protocol.
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
