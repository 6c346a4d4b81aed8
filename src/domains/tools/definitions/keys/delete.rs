//! Delete key tool definition.

use rmcp::{
    handler::server::tool::schema_for_type,
    model::{JsonObject, Tool},
};
use schemars::JsonSchema;
use serde::Deserialize;
use tracing::{info, instrument};

use super::common::{parse_params, require_arguments};
use crate::domains::lokalise::{KeyId, LokaliseClient};
use crate::domains::tools::ToolError;

/// Parameters for the delete key tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct DeleteKeyParams {
    /// The ID of the key to delete
    #[schemars(with = "String")]
    pub key_id: KeyId,
}

/// Delete key tool - removes a translation key by id.
pub struct DeleteKeyTool;

impl DeleteKeyTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "delete_lokalise_key";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Delete a translation key from Lokalise";

    /// Validate and decode raw tool arguments.
    ///
    /// Lokalise key ids are numeric. Anything else could resolve to another
    /// endpoint once placed in the URL path (`..` is the project itself).
    pub fn parse(arguments: JsonObject) -> Result<DeleteKeyParams, ToolError> {
        require_arguments(&arguments, &["key_id"])?;
        let params: DeleteKeyParams = parse_params(arguments)?;

        if let KeyId::Text(id) = &params.key_id {
            if id.trim().is_empty() {
                return Err(ToolError::invalid_arguments("key_id must not be empty"));
            }
            if !id.bytes().all(|b| b.is_ascii_digit()) {
                return Err(ToolError::invalid_arguments(format!(
                    "key_id is not a valid key ID: {id}"
                )));
            }
        }

        Ok(params)
    }

    /// Execute the tool logic.
    #[instrument(skip_all, fields(key_id = %params.key_id))]
    pub async fn execute(
        params: &DeleteKeyParams,
        client: &LokaliseClient,
    ) -> Result<String, ToolError> {
        info!("Deleting key {}", params.key_id);
        client.delete_key(&params.key_id).await?;
        info!("Deleted key {}", params.key_id);

        Ok(format!(
            "✅ Successfully deleted key with ID: {}",
            params.key_id
        ))
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: schema_for_type::<DeleteKeyParams>().into(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }
}
