//! Common utilities shared across the key tools.
//!
//! Argument extraction, result construction and the translation listing
//! used by both the create and the get output.

use rmcp::model::{CallToolResult, Content, JsonObject};
use serde::de::DeserializeOwned;
use tracing::warn;

use crate::domains::lokalise::Translation;
use crate::domains::tools::ToolError;

/// Check that every field in `fields` is present and not `null`.
pub fn require_arguments(arguments: &JsonObject, fields: &[&str]) -> Result<(), ToolError> {
    match fields
        .iter()
        .find(|field| arguments.get(**field).is_none_or(|v| v.is_null()))
    {
        Some(field) => Err(ToolError::missing_argument(*field)),
        None => Ok(()),
    }
}

/// Deserialize tool arguments into a typed params struct.
pub fn parse_params<T: DeserializeOwned>(arguments: JsonObject) -> Result<T, ToolError> {
    serde_json::from_value(serde_json::Value::Object(arguments))
        .map_err(|e| ToolError::invalid_arguments(e.to_string()))
}

/// Reject blank string arguments.
pub fn require_non_empty(field: &str, value: &str) -> Result<(), ToolError> {
    if value.trim().is_empty() {
        return Err(ToolError::invalid_arguments(format!(
            "{field} must not be empty"
        )));
    }
    Ok(())
}

/// Render translations as `  <lang>: "<value>"` lines.
///
/// Empty translations are left out; callers still count them.
pub fn format_translations(translations: &[Translation]) -> String {
    translations
        .iter()
        .filter(|t| !t.is_empty())
        .map(|t| format!("  {}: \"{}\"", t.language_iso, t.translation))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Create the error-flagged result for a failed tool call.
pub fn error_result(error: &ToolError) -> CallToolResult {
    warn!("{}", error);
    CallToolResult::error(vec![Content::text(format!("Error: {error}"))])
}

/// Create a success result with text content.
pub fn success_result(content: String) -> CallToolResult {
    CallToolResult::success(vec![Content::text(content)])
}
