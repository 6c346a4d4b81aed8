//! Configuration management for the MCP server.
//!
//! Configuration is resolved once at startup from environment variables
//! (optionally seeded from a `.env` file) and shared immutably afterwards.

use super::error::{Error, Result};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

/// Default Lokalise API base URL. The project id is appended per request.
pub const DEFAULT_LOKALISE_API_URL: &str = "https://api.lokalise.com/api2/projects";

/// Platform attached to new keys when `LOKALISE_PLATFORMS` is not set.
pub const DEFAULT_PLATFORM: &str = "web";

const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Main configuration structure for the MCP server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server identification and metadata.
    pub server: ServerConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,

    /// Lokalise project and credentials.
    pub lokalise: LokaliseConfig,
}

/// Server identification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// The name of the server as reported to clients.
    pub name: String,

    /// The version of the server.
    pub version: String,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "trace").
    pub level: String,
}

/// Lokalise API configuration.
///
/// Credentials are optional here so the server can start and report a
/// readable error on each tool call instead of refusing to boot.
#[derive(Clone, Serialize, Deserialize)]
pub struct LokaliseConfig {
    /// Lokalise project identifier (`LOKALISE_PROJECT_ID`).
    pub project_id: Option<String>,

    /// API token sent as `X-Api-Token` (`LOKALISE_API_TOKEN`).
    #[serde(skip_serializing)]
    pub api_token: Option<String>,

    /// Platforms assigned to newly created keys (`LOKALISE_PLATFORMS`).
    pub platforms: Vec<String>,

    /// Base URL of the projects endpoint (`LOKALISE_API_URL`).
    pub api_url: String,

    /// Per-request timeout in seconds (`LOKALISE_TIMEOUT_SECS`).
    pub timeout_secs: u64,
}

/// Custom Debug implementation to redact secrets from logs.
impl std::fmt::Debug for LokaliseConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LokaliseConfig")
            .field("project_id", &self.project_id)
            .field("api_token", &self.api_token.as_ref().map(|_| "[REDACTED]"))
            .field("platforms", &self.platforms)
            .field("api_url", &self.api_url)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

impl Default for LokaliseConfig {
    fn default() -> Self {
        Self {
            project_id: None,
            api_token: None,
            platforms: vec![DEFAULT_PLATFORM.to_string()],
            api_url: DEFAULT_LOKALISE_API_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl LokaliseConfig {
    /// Build the Lokalise configuration from a variable lookup function.
    ///
    /// Empty values are treated as unset, matching how shells commonly
    /// export blank variables.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let defaults = Self::default();

        let platforms = non_empty("LOKALISE_PLATFORMS")
            .map(|raw| parse_platforms(&raw))
            .filter(|p| !p.is_empty())
            .unwrap_or(defaults.platforms);

        Self {
            project_id: non_empty("LOKALISE_PROJECT_ID"),
            api_token: non_empty("LOKALISE_API_TOKEN"),
            platforms,
            api_url: non_empty("LOKALISE_API_URL").unwrap_or(defaults.api_url),
            timeout_secs: non_empty("LOKALISE_TIMEOUT_SECS")
                .and_then(|v| v.trim().parse().ok())
                .unwrap_or(defaults.timeout_secs),
        }
    }

    /// Whether both the project id and the API token are present.
    pub fn has_credentials(&self) -> bool {
        self.project_id.is_some() && self.api_token.is_some()
    }
}

/// Split a comma-separated platform list, trimming entries and dropping blanks.
fn parse_platforms(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(str::to_string)
        .collect()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                name: "lokalise-server".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            logging: LoggingConfig {
                level: "info".to_string(),
            },
            lokalise: LokaliseConfig::default(),
        }
    }
}

impl Config {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from environment variables.
    ///
    /// Server settings use the `MCP_` prefix (`MCP_SERVER_NAME`,
    /// `MCP_LOG_LEVEL`); Lokalise settings use the `LOKALISE_` prefix.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let mut config = Self::default();

        if let Ok(name) = std::env::var("MCP_SERVER_NAME") {
            config.server.name = name;
        }

        if let Ok(level) = std::env::var("MCP_LOG_LEVEL") {
            config.logging.level = level;
        }

        config.lokalise = LokaliseConfig::from_lookup(|key| std::env::var(key).ok());

        config
    }

    /// Reject settings the server cannot run with.
    ///
    /// Missing Lokalise credentials are not an error here; they are reported
    /// per tool call.
    pub fn validate(&self) -> Result<()> {
        let api_url = &self.lokalise.api_url;
        if !(api_url.starts_with("http://") || api_url.starts_with("https://")) {
            return Err(Error::config(format!(
                "LOKALISE_API_URL must be an http(s) URL, got '{api_url}'"
            )));
        }

        if self.lokalise.timeout_secs == 0 {
            return Err(Error::config("LOKALISE_TIMEOUT_SECS must be greater than 0"));
        }

        Ok(())
    }

    /// Log the parts of the configuration an operator usually needs to check.
    ///
    /// Called after logging is initialized, since `from_env` runs before it.
    pub fn log_summary(&self) {
        if self.lokalise.has_credentials() {
            info!(
                "Lokalise project {} configured (platforms: {})",
                self.lokalise.project_id.as_deref().unwrap_or_default(),
                self.lokalise.platforms.join(", ")
            );
        } else {
            warn!(
                "LOKALISE_PROJECT_ID and/or LOKALISE_API_TOKEN not set - \
                 every tool call will fail until they are provided"
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::sync::Mutex;

    // Mutex to ensure env var tests run serially
    static ENV_TEST_LOCK: Mutex<()> = Mutex::new(());

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_lokalise_from_lookup_full() {
        let config = LokaliseConfig::from_lookup(lookup_from(&[
            ("LOKALISE_PROJECT_ID", "123.abc"),
            ("LOKALISE_API_TOKEN", "secret"),
            ("LOKALISE_PLATFORMS", "web, ios ,android"),
            ("LOKALISE_API_URL", "http://localhost:9999/api2/projects"),
            ("LOKALISE_TIMEOUT_SECS", "5"),
        ]));

        assert_eq!(config.project_id.as_deref(), Some("123.abc"));
        assert_eq!(config.api_token.as_deref(), Some("secret"));
        assert_eq!(config.platforms, vec!["web", "ios", "android"]);
        assert_eq!(config.api_url, "http://localhost:9999/api2/projects");
        assert_eq!(config.timeout_secs, 5);
        assert!(config.has_credentials());
    }

    #[test]
    fn test_lokalise_defaults() {
        let config = LokaliseConfig::from_lookup(lookup_from(&[]));
        assert!(!config.has_credentials());
        assert_eq!(config.platforms, vec!["web"]);
        assert_eq!(config.api_url, DEFAULT_LOKALISE_API_URL);
        assert_eq!(config.timeout_secs, 30);
    }

    #[test]
    fn test_empty_values_are_unset() {
        let config = LokaliseConfig::from_lookup(lookup_from(&[
            ("LOKALISE_PROJECT_ID", ""),
            ("LOKALISE_API_TOKEN", "token"),
            ("LOKALISE_PLATFORMS", " , ,"),
        ]));
        assert!(config.project_id.is_none());
        assert!(!config.has_credentials());
        assert_eq!(config.platforms, vec!["web"]);
    }

    #[test]
    fn test_invalid_timeout_falls_back() {
        let config =
            LokaliseConfig::from_lookup(lookup_from(&[("LOKALISE_TIMEOUT_SECS", "soon")]));
        assert_eq!(config.timeout_secs, 30);
    }

    #[test]
    fn test_api_token_redacted_in_debug() {
        let config = LokaliseConfig {
            api_token: Some("super_secret_token".to_string()),
            ..Default::default()
        };
        let debug_str = format!("{:?}", config);
        assert!(debug_str.contains("REDACTED"));
        assert!(!debug_str.contains("super_secret_token"));
    }

    #[test]
    fn test_api_token_not_serialized() {
        let mut config = Config::default();
        config.lokalise.api_token = Some("super_secret_token".to_string());
        let json = serde_json::to_string(&config).unwrap();
        assert!(!json.contains("super_secret_token"));
        assert!(!json.contains("api_token"));
    }

    #[test]
    fn test_validate() {
        assert!(Config::default().validate().is_ok());

        let mut config = Config::default();
        config.lokalise.api_url = "ftp://example.com".to_string();
        assert!(matches!(config.validate(), Err(Error::Config(_))));

        let mut config = Config::default();
        config.lokalise.timeout_secs = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_from_env_reads_server_name() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::set_var("MCP_SERVER_NAME", "lokalise-test");
        }
        let config = Config::from_env();
        assert_eq!(config.server.name, "lokalise-test");
        unsafe {
            std::env::remove_var("MCP_SERVER_NAME");
        }
    }
}
