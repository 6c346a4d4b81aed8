//! Core module containing shared infrastructure components.
//!
//! Configuration, the unified error type, the MCP handler and the STDIO
//! transport it is served on.

pub mod config;
pub mod error;
pub mod server;
pub mod transport;

pub use config::{Config, LokaliseConfig};
pub use error::{Error, Result};
pub use server::McpServer;
pub use transport::{TransportError, serve_stdio};
