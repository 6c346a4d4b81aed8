//! Lokalise REST API client.
//!
//! Every request is scoped to one project, authenticated with the
//! `X-Api-Token` header and answered with JSON. Non-2xx responses are turned
//! into an [`ApiError`] carrying the message Lokalise put in the body.

use reqwest::{Client, Method};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, instrument, warn};

use super::error::ApiError;
use super::models::{
    CreateKeysRequest, CreateKeysResponse, KeyId, KeyListResponse, KeyResponse, NewKey,
    TranslationKey,
};
use crate::core::config::LokaliseConfig;
use crate::domains::tools::ToolError;

const API_TOKEN_HEADER: &str = "X-Api-Token";

/// Client for a single Lokalise project.
#[derive(Clone)]
pub struct LokaliseClient {
    /// Shared HTTP client instance.
    http: Client,

    /// `<api_url>/<project_id>`, without a trailing slash.
    project_url: String,

    api_token: String,
}

impl std::fmt::Debug for LokaliseClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LokaliseClient")
            .field("project_url", &self.project_url)
            .field("api_token", &"[REDACTED]")
            .finish()
    }
}

impl LokaliseClient {
    /// Create a client for the given project.
    pub fn new(
        http: Client,
        api_url: &str,
        project_id: impl AsRef<str>,
        api_token: impl Into<String>,
    ) -> Self {
        Self {
            http,
            project_url: format!("{}/{}", api_url.trim_end_matches('/'), project_id.as_ref()),
            api_token: api_token.into(),
        }
    }

    /// Create a client from the resolved configuration.
    ///
    /// Fails when the project id or the API token is missing.
    pub fn from_config(config: &LokaliseConfig, http: Client) -> Result<Self, ToolError> {
        match (&config.project_id, &config.api_token) {
            (Some(project_id), Some(api_token)) => Ok(Self::new(
                http,
                &config.api_url,
                project_id,
                api_token.clone(),
            )),
            _ => Err(ToolError::configuration(
                "LOKALISE_PROJECT_ID and LOKALISE_API_TOKEN must be set",
            )),
        }
    }

    /// Full URL for an endpoint path such as `/keys`.
    pub fn url(&self, endpoint: &str) -> String {
        format!("{}{}", self.project_url, endpoint)
    }

    /// Issue a request and return the raw body of a 2xx response.
    ///
    /// Non-2xx responses become an [`ApiError`] built from the body's
    /// `error.message`, whatever the content type.
    #[instrument(skip(self, body))]
    async fn send(
        &self,
        method: Method,
        endpoint: &str,
        body: Option<&Value>,
    ) -> Result<Vec<u8>, ApiError> {
        let url = self.url(endpoint);
        debug!("{} {}", method, url);

        let mut request = self
            .http
            .request(method, &url)
            .header(API_TOKEN_HEADER, &self.api_token);

        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await?;
        let status = response.status();
        let bytes = response.bytes().await?;

        debug!("Lokalise responded {} ({} bytes)", status, bytes.len());

        if !status.is_success() {
            let parsed = serde_json::from_slice::<Value>(&bytes).unwrap_or(Value::Null);
            let error = ApiError::from_body(&parsed);
            warn!("Lokalise API error ({}): {}", status, error);
            return Err(error);
        }

        Ok(bytes.to_vec())
    }

    /// Issue a request and return the parsed JSON body.
    ///
    /// An empty success body parses as `null`.
    pub async fn call(
        &self,
        method: Method,
        endpoint: &str,
        body: Option<&Value>,
    ) -> Result<Value, ApiError> {
        let bytes = self.send(method, endpoint, body).await?;
        if bytes.is_empty() {
            return Ok(Value::Null);
        }

        serde_json::from_slice(&bytes)
            .map_err(|e| ApiError::unexpected_response(format!("invalid JSON: {e}")))
    }

    /// Create a single key and return it as stored by Lokalise.
    #[instrument(skip(self, key), fields(key_name = %key.key_name))]
    pub async fn create_key(&self, key: &NewKey) -> Result<TranslationKey, ApiError> {
        let body = serde_json::to_value(CreateKeysRequest { keys: [key] })
            .map_err(|e| ApiError::new(format!("Failed to encode request: {e}")))?;

        let response: CreateKeysResponse =
            decode(self.call(Method::POST, "/keys", Some(&body)).await?)?;

        if let Some(created) = response.keys.into_iter().next() {
            return Ok(created);
        }

        // Bulk endpoints report per-key failures with a 2xx status.
        let message = response
            .errors
            .into_iter()
            .find_map(|e| e.message)
            .unwrap_or_else(|| ApiError::UNKNOWN.to_string());
        warn!("Lokalise rejected key '{}': {}", key.key_name, message);
        Err(ApiError::new(message))
    }

    /// Delete a key by id.
    ///
    /// Only the status matters; the success body is not inspected.
    #[instrument(skip(self), fields(key_id = %key_id))]
    pub async fn delete_key(&self, key_id: &KeyId) -> Result<(), ApiError> {
        self.send(Method::DELETE, &format!("/keys/{key_id}"), None)
            .await
            .map(|_| ())
    }

    /// List keys whose name matches `key_name`, in the order Lokalise returns them.
    #[instrument(skip(self))]
    pub async fn find_keys(&self, key_name: &str) -> Result<Vec<TranslationKey>, ApiError> {
        let query = serde_urlencoded::to_string(&[("filter_keys", key_name)])
            .map_err(|e| ApiError::new(format!("Failed to encode query: {e}")))?;

        let response: KeyListResponse =
            decode(self.call(Method::GET, &format!("/keys?{query}"), None).await?)?;
        Ok(response.keys)
    }

    /// Fetch the full details of a key.
    #[instrument(skip(self), fields(key_id = %key_id))]
    pub async fn get_key(&self, key_id: &KeyId) -> Result<TranslationKey, ApiError> {
        let response: KeyResponse =
            decode(self.call(Method::GET, &format!("/keys/{key_id}"), None).await?)?;
        Ok(response.key)
    }
}

fn decode<T: DeserializeOwned>(value: Value) -> Result<T, ApiError> {
    serde_json::from_value(value).map_err(ApiError::unexpected_response)
}
