//! Lokalise MCP Server Library
//!
//! This crate exposes Lokalise translation-key management to MCP clients
//! through three tools: `create_lokalise_key`, `get_lokalise_key` and
//! `delete_lokalise_key`.
//!
//! # Architecture
//!
//! - **core**: Configuration, error handling, the server handler and the STDIO transport
//! - **domains**: Business logic organized by bounded contexts
//!   - **lokalise**: HTTP client and models for the Lokalise REST API
//!   - **tools**: Tool definitions, argument validation and dispatch
//!
//! # Example
//!
//! ```rust,no_run
//! use lokalise_mcp_server::core::{Config, McpServer, serve_stdio};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env();
//!     config.validate()?;
//!     let server = McpServer::new(config)?;
//!     serve_stdio(server).await?;
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use core::{Config, Error, McpServer, Result};
