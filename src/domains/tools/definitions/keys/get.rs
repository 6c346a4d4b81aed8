//! Get key tool definition.
//!
//! Looks a key up by name, then fetches its full details by id. When the
//! name filter matches several keys, the first one in Lokalise's response
//! order is used.

use rmcp::{
    handler::server::tool::schema_for_type,
    model::{JsonObject, Tool},
};
use schemars::JsonSchema;
use serde::Deserialize;
use tracing::{debug, info, instrument};

use super::common::{format_translations, parse_params, require_arguments, require_non_empty};
use crate::domains::lokalise::{LokaliseClient, TranslationKey};
use crate::domains::tools::ToolError;

// ============================================================================
// Tool Parameters
// ============================================================================

/// Parameters for the get key tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct GetKeyParams {
    /// The name of the key to retrieve
    pub key_name: String,
}

// ============================================================================
// Tool Definition
// ============================================================================

/// Get key tool - shows the details and translations of a key.
pub struct GetKeyTool;

impl GetKeyTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "get_lokalise_key";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Get a specific translation key from Lokalise by name";

    /// Validate and decode raw tool arguments.
    pub fn parse(arguments: JsonObject) -> Result<GetKeyParams, ToolError> {
        require_arguments(&arguments, &["key_name"])?;
        let params: GetKeyParams = parse_params(arguments)?;
        require_non_empty("key_name", &params.key_name)?;
        Ok(params)
    }

    /// Execute the tool logic.
    #[instrument(skip_all, fields(key_name = %params.key_name))]
    pub async fn execute(
        params: &GetKeyParams,
        client: &LokaliseClient,
    ) -> Result<String, ToolError> {
        info!("Looking up key '{}'", params.key_name);

        let matches = client.find_keys(&params.key_name).await?;
        let first = matches
            .first()
            .ok_or_else(|| ToolError::not_found(&params.key_name))?;

        debug!(
            "{} key(s) matched, using id {}",
            matches.len(),
            first.key_id
        );

        let key = client.get_key(&first.key_id).await?;
        Ok(Self::format_details(&params.key_name, &key))
    }

    /// Render the detail view of a key.
    ///
    /// `requested_name` is shown when Lokalise returns no usable key name.
    pub fn format_details(requested_name: &str, key: &TranslationKey) -> String {
        format!(
            "🔍 Key Details: {}\n\n\
             Key ID: {}\n\
             Platforms: {}\n\
             Created: {}\n\
             Modified: {}\n\
             Base Words: {}\n\
             Is Plural: {}\n\
             Is Hidden: {}\n\
             Is Archived: {}\n\n\
             Translations:\n{}",
            key.display_name().unwrap_or(requested_name),
            key.key_id,
            key.platforms.join(", "),
            key.created_at,
            key.modified_at,
            key.base_words,
            key.is_plural,
            key.is_hidden,
            key.is_archived,
            format_translations(&key.translations)
        )
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: schema_for_type::<GetKeyParams>().into(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
