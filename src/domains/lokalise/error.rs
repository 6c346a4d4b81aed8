//! Lokalise API error type.

use thiserror::Error;

/// A failed call to the Lokalise API.
///
/// Carries only a human-readable message: either the `error.message` from the
/// response body, a fallback literal, or a description of the transport
/// failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ApiError {
    message: String,
}

impl ApiError {
    /// Message used when an error response carries no `error.message`.
    pub const UNKNOWN: &'static str = "Unknown error";

    /// Create an API error with the given message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// The human-readable message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Build an error from a non-success response body.
    pub(crate) fn from_body(body: &serde_json::Value) -> Self {
        let message = body
            .pointer("/error/message")
            .and_then(serde_json::Value::as_str)
            .unwrap_or(Self::UNKNOWN);
        Self::new(message)
    }

    /// A 2xx response whose body did not have the expected shape.
    pub(crate) fn unexpected_response(detail: impl std::fmt::Display) -> Self {
        Self::new(format!("Unexpected response from Lokalise: {detail}"))
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            Self::new("Request timed out")
        } else if e.is_connect() {
            Self::new("Connection failed")
        } else {
            Self::new(e.to_string())
        }
    }
}
