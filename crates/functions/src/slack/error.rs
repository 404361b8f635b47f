//! Slack-related errors.

use thiserror::Error;

/// Errors that can occur when interacting with Slack.
#[derive(Debug, Error)]
pub enum SlackError {
    /// HTTP request failed.
    #[error("Slack request failed: {0}")]
    Request(String),

    /// Failed to parse response.
    #[error("Slack response error: {0}")]
    Response(String),

    /// Slack answered with a non-success HTTP status and no error code,
    /// e.g. an HTML page from a proxy in front of the API.
    #[error("Slack returned HTTP {status}")]
    Http {
        status: u16,
        /// Parsed JSON body, or the raw text when it is not JSON.
        body: serde_json::Value,
    },

    /// Slack API returned `ok: false` with this error code.
    #[error("Slack API error: {0}")]
    Api(String),
}

impl SlackError {
    /// Slack's error code, if the API itself rejected the call.
    #[must_use]
    pub fn api_code(&self) -> Option<&str> {
        match self {
            Self::Api(code) => Some(code),
            _ => None,
        }
    }
}
