//! STDIO transport.
//!
//! The MCP session runs over stdin/stdout: stdout carries protocol messages
//! only, so every log line goes to stderr.

use rmcp::ServiceExt;
use thiserror::Error;
use tracing::info;

use super::server::McpServer;

/// Failures of the MCP session itself, as opposed to failed tool calls.
#[derive(Debug, Error)]
pub enum TransportError {
    /// The client never completed the MCP handshake.
    #[error("Failed to start MCP session: {0}")]
    Handshake(String),

    /// The session task stopped abnormally.
    #[error("MCP session aborted: {0}")]
    Session(String),
}

/// Serve `server` on stdin/stdout until the client closes the stream.
///
/// Dropping the returned future tears the session down, which is how
/// `main` handles Ctrl-C.
pub async fn serve_stdio(server: McpServer) -> Result<(), TransportError> {
    info!("{} ready - communicating via stdin/stdout", server.name());

    let session = server
        .serve(rmcp::transport::stdio())
        .await
        .map_err(|e| TransportError::Handshake(e.to_string()))?;

    let reason = session
        .waiting()
        .await
        .map_err(|e| TransportError::Session(e.to_string()))?;

    info!("Client session closed ({:?})", reason);
    Ok(())
}
