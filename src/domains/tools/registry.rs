//! Tool Registry - central registration and dispatch for all tools.
//!
//! This module provides:
//! - The static list of tool descriptors advertised to clients
//! - The dispatcher behind the MCP `tools/call` handler
//!
//! Routing goes through the closed [`KeyTool`] enum, so adding a tool without
//! handling it is a compile error rather than a runtime miss.

use std::sync::Arc;

use rmcp::model::{CallToolResult, JsonObject, Tool};
use tracing::{info, instrument};

use super::definitions::keys::common::{error_result, success_result};
use super::definitions::{CreateKeyTool, DeleteKeyTool, GetKeyTool};
use super::error::ToolError;
use crate::core::config::Config;
use crate::domains::lokalise::LokaliseClient;

// ============================================================================
// Tool identifiers
// ============================================================================

/// Every tool the server exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyTool {
    Create,
    Delete,
    Get,
}

impl KeyTool {
    /// All tools, in the order they are advertised.
    pub const ALL: [KeyTool; 3] = [Self::Create, Self::Delete, Self::Get];

    /// Name as registered in MCP.
    pub fn name(self) -> &'static str {
        match self {
            Self::Create => CreateKeyTool::NAME,
            Self::Delete => DeleteKeyTool::NAME,
            Self::Get => GetKeyTool::NAME,
        }
    }

    /// Look a tool up by its exact name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|tool| tool.name() == name)
    }

    /// Tool metadata shown to clients.
    pub fn to_tool(self) -> Tool {
        match self {
            Self::Create => CreateKeyTool::to_tool(),
            Self::Delete => DeleteKeyTool::to_tool(),
            Self::Get => GetKeyTool::to_tool(),
        }
    }
}

// ============================================================================
// Tool Registry
// ============================================================================

/// Tool registry - lists and dispatches all available tools.
#[derive(Clone)]
pub struct ToolRegistry {
    config: Arc<Config>,

    /// HTTP client shared by every Lokalise call.
    http: reqwest::Client,
}

impl ToolRegistry {
    /// Create a new tool registry.
    pub fn new(config: Arc<Config>, http: reqwest::Client) -> Self {
        Self { config, http }
    }

    /// Get all tool names.
    pub fn tool_names(&self) -> Vec<&'static str> {
        KeyTool::ALL.into_iter().map(KeyTool::name).collect()
    }

    /// Get all tools as Tool models (metadata).
    ///
    /// This is the single source of truth for all available tools.
    pub fn get_all_tools() -> Vec<Tool> {
        KeyTool::ALL.into_iter().map(KeyTool::to_tool).collect()
    }

    /// Dispatch a tool call.
    ///
    /// Always returns a well-formed result: failures, including an unknown
    /// tool name, come back as an error-flagged result reading
    /// `Error: <message>`.
    #[instrument(skip(self, arguments))]
    pub async fn call_tool(&self, name: &str, arguments: Option<JsonObject>) -> CallToolResult {
        info!("Tool call: {}", name);

        let outcome = match KeyTool::from_name(name) {
            Some(tool) => self.dispatch(tool, arguments.unwrap_or_default()).await,
            None => Err(ToolError::unknown_tool(name)),
        };

        match outcome {
            Ok(text) => success_result(text),
            Err(e) => error_result(&e),
        }
    }

    async fn dispatch(&self, tool: KeyTool, arguments: JsonObject) -> Result<String, ToolError> {
        let lokalise = &self.config.lokalise;

        match tool {
            KeyTool::Create => {
                let params = CreateKeyTool::parse(arguments)?;
                let client = LokaliseClient::from_config(lokalise, self.http.clone())?;
                CreateKeyTool::execute(&params, &client, &lokalise.platforms).await
            }
            KeyTool::Delete => {
                let params = DeleteKeyTool::parse(arguments)?;
                let client = LokaliseClient::from_config(lokalise, self.http.clone())?;
                DeleteKeyTool::execute(&params, &client).await
            }
            KeyTool::Get => {
                let params = GetKeyTool::parse(arguments)?;
                let client = LokaliseClient::from_config(lokalise, self.http.clone())?;
                GetKeyTool::execute(&params, &client).await
            }
        }
    }
}
