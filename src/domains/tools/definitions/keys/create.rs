//! Create key tool definition.
//!
//! Creates a translation key with one translation per language on the
//! platforms configured for the server.

use rmcp::{
    handler::server::tool::schema_for_type,
    model::{JsonObject, Tool},
};
use schemars::JsonSchema;
use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer};
use std::fmt;
use tracing::{info, instrument};

use super::common::{format_translations, parse_params, require_arguments, require_non_empty};
use crate::domains::lokalise::{LokaliseClient, NewKey, Translation, TranslationKey};
use crate::domains::tools::ToolError;

// ============================================================================
// Tool Parameters
// ============================================================================

/// Parameters for the create key tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct CreateKeyParams {
    /// The name/identifier for the translation key
    pub key_name: String,

    /// Translation values by language code (e.g., {"en": "Hello", "de": "Hallo"})
    #[schemars(with = "std::collections::BTreeMap<String, String>")]
    pub translations: Translations,
}

/// Language code to translation pairs, in the order the caller sent them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Translations(Vec<(String, String)>);

impl Translations {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Convert to the list form the Lokalise API expects.
    pub fn to_api(&self) -> Vec<Translation> {
        self.0
            .iter()
            .map(|(language_iso, text)| Translation::new(language_iso, text))
            .collect()
    }
}

impl<'de> Deserialize<'de> for Translations {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct TranslationsVisitor;

        impl<'de> Visitor<'de> for TranslationsVisitor {
            type Value = Translations;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of language codes to translation strings")
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut pairs = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some((language, text)) = map.next_entry::<String, String>()? {
                    pairs.push((language, text));
                }
                Ok(Translations(pairs))
            }
        }

        deserializer.deserialize_map(TranslationsVisitor)
    }
}

// ============================================================================
// Tool Definition
// ============================================================================

/// Create key tool - adds a new translation key to the project.
pub struct CreateKeyTool;

impl CreateKeyTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "create_lokalise_key";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str =
        "Create a new translation key in Lokalise with translations";

    /// Validate and decode raw tool arguments.
    pub fn parse(arguments: JsonObject) -> Result<CreateKeyParams, ToolError> {
        require_arguments(&arguments, &["key_name", "translations"])?;
        let params: CreateKeyParams = parse_params(arguments)?;
        require_non_empty("key_name", &params.key_name)?;
        Ok(params)
    }

    /// Execute the tool logic.
    #[instrument(skip_all, fields(key_name = %params.key_name))]
    pub async fn execute(
        params: &CreateKeyParams,
        client: &LokaliseClient,
        platforms: &[String],
    ) -> Result<String, ToolError> {
        info!(
            "Creating key '{}' with {} translation(s)",
            params.key_name,
            params.translations.len()
        );

        let new_key = NewKey {
            key_name: params.key_name.clone(),
            platforms: platforms.to_vec(),
            translations: params.translations.to_api(),
        };

        let created = client.create_key(&new_key).await?;
        info!("Created key '{}' with id {}", params.key_name, created.key_id);

        Ok(Self::format_created(&params.key_name, &created))
    }

    /// Render the confirmation text for a created key.
    pub fn format_created(key_name: &str, key: &TranslationKey) -> String {
        format!(
            "✅ Successfully created key \"{}\"\n\n\
             Key ID: {}\n\
             Platforms: {}\n\
             Translations: {}\n\
             Created: {}\n\n\
             Translations:\n{}",
            key_name,
            key.key_id,
            key.platforms.join(", "),
            key.translations.len(),
            key.created_at,
            format_translations(&key.translations)
        )
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: schema_for_type::<CreateKeyParams>().into(),
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
