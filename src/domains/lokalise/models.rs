//! Lokalise data model.
//!
//! Only the fields rendered by the key tools are modelled. Everything is
//! owned by the remote API; these types are a read-only view plus the
//! payload used to create new keys.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

// ============================================================================
// Identifiers
// ============================================================================

/// Identifier of a translation key.
///
/// Lokalise returns numeric ids, but tool callers pass them as strings, so
/// both forms are accepted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum KeyId {
    Numeric(u64),
    Text(String),
}

impl fmt::Display for KeyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Numeric(id) => write!(f, "{id}"),
            Self::Text(id) => f.write_str(id),
        }
    }
}

impl From<u64> for KeyId {
    fn from(id: u64) -> Self {
        Self::Numeric(id)
    }
}

impl From<&str> for KeyId {
    fn from(id: &str) -> Self {
        Self::Text(id.to_string())
    }
}

/// Name of a key, either a single string or one name per platform.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum KeyName {
    Plain(String),
    PerPlatform(PlatformKeyNames),
}

/// Per-platform key names as returned by Lokalise.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlatformKeyNames {
    #[serde(default)]
    pub ios: Option<String>,
    #[serde(default)]
    pub android: Option<String>,
    #[serde(default)]
    pub web: Option<String>,
    #[serde(default)]
    pub other: Option<String>,
}

impl KeyName {
    /// The name to show to users: `web`, then `other`, then `ios`, then `android`.
    pub fn display_name(&self) -> Option<&str> {
        match self {
            Self::Plain(name) => Some(name.as_str()).filter(|n| !n.is_empty()),
            Self::PerPlatform(names) => [&names.web, &names.other, &names.ios, &names.android]
                .into_iter()
                .filter_map(|n| n.as_deref())
                .find(|n| !n.is_empty()),
        }
    }
}

// ============================================================================
// Keys and translations
// ============================================================================

/// A single translation of a key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Translation {
    pub language_iso: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub translation: String,
}

impl Translation {
    pub fn new(language_iso: impl Into<String>, translation: impl Into<String>) -> Self {
        Self {
            language_iso: language_iso.into(),
            translation: translation.into(),
        }
    }

    /// Whether the translation has no text yet.
    pub fn is_empty(&self) -> bool {
        self.translation.is_empty()
    }
}

/// A translation key as returned by the list, detail and create endpoints.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TranslationKey {
    pub key_id: KeyId,
    #[serde(default)]
    pub key_name: Option<KeyName>,
    #[serde(default)]
    pub platforms: Vec<String>,
    #[serde(default)]
    pub translations: Vec<Translation>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub created_at: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub modified_at: String,
    #[serde(default)]
    pub base_words: u64,
    #[serde(default)]
    pub is_plural: bool,
    #[serde(default)]
    pub is_hidden: bool,
    #[serde(default)]
    pub is_archived: bool,
}

impl TranslationKey {
    /// Display name of the key, if Lokalise returned one.
    pub fn display_name(&self) -> Option<&str> {
        self.key_name.as_ref().and_then(KeyName::display_name)
    }
}

/// Payload for a key to be created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewKey {
    pub key_name: String,
    pub platforms: Vec<String>,
    pub translations: Vec<Translation>,
}

// ============================================================================
// Request / response envelopes
// ============================================================================

#[derive(Debug, Serialize)]
pub(crate) struct CreateKeysRequest<'a> {
    pub keys: [&'a NewKey; 1],
}

#[derive(Debug, Deserialize)]
pub(crate) struct CreateKeysResponse {
    #[serde(default)]
    pub keys: Vec<TranslationKey>,
    #[serde(default)]
    pub errors: Vec<BulkError>,
}

/// Per-item failure reported inside a 2xx bulk response.
#[derive(Debug, Deserialize)]
pub(crate) struct BulkError {
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct KeyListResponse {
    #[serde(default)]
    pub keys: Vec<TranslationKey>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct KeyResponse {
    pub key: TranslationKey,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
