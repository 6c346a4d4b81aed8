//! Tool-specific error types.

use thiserror::Error;

use crate::domains::lokalise::ApiError;

/// Errors that can occur while handling a tool call.
///
/// None of these escape the dispatcher: each is rendered as an
/// error-flagged tool result reading `Error: <message>`.
#[derive(Debug, Error)]
pub enum ToolError {
    /// Required configuration is absent.
    #[error("{0}")]
    Configuration(String),

    /// The requested tool is not registered.
    #[error("Unknown tool: {0}")]
    UnknownTool(String),

    /// A required argument was not supplied.
    #[error("Missing required argument: {0}")]
    MissingArgument(String),

    /// Invalid arguments were provided to the tool.
    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),

    /// The Lokalise API rejected the request or could not be reached.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// A lookup by key name matched nothing.
    #[error("No key found with name: {0}")]
    NotFound(String),
}

impl ToolError {
    /// Create a new configuration error.
    pub fn configuration(msg: impl Into<String>) -> Self {
        Self::Configuration(msg.into())
    }

    /// Create a new "unknown tool" error.
    pub fn unknown_tool(name: impl Into<String>) -> Self {
        Self::UnknownTool(name.into())
    }

    /// Create a new "missing argument" error.
    pub fn missing_argument(field: impl Into<String>) -> Self {
        Self::MissingArgument(field.into())
    }

    /// Create a new "invalid arguments" error.
    pub fn invalid_arguments(msg: impl Into<String>) -> Self {
        Self::InvalidArguments(msg.into())
    }

    /// Create a new "not found" error.
    pub fn not_found(key_name: impl Into<String>) -> Self {
        Self::NotFound(key_name.into())
    }
}
