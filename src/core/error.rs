//! Error types and handling for the MCP server.
//!
//! This module defines a unified error type for failures that happen outside
//! a tool call: invalid settings, building the server, running the
//! transport. Failures inside a tool call are reported to the client
//! as error-flagged results instead (see `domains::tools`).

use thiserror::Error;

/// A specialized Result type for MCP server operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Unified error type for the MCP server.
#[derive(Debug, Error)]
pub enum Error {
    /// The MCP session failed.
    #[error("Transport error: {0}")]
    Transport(#[from] super::transport::TransportError),

    /// Configuration-related errors.
    #[error("Configuration error: {0}")]
    Config(String),

    /// The HTTP client for the Lokalise API could not be built.
    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),
}

impl Error {
    /// Create a new configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}
