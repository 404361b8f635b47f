//! `OpenAI`-related errors.

use thiserror::Error;

/// Errors that can occur when calling the `OpenAI` API.
#[derive(Debug, Error)]
pub enum OpenAiError {
    /// HTTP request failed.
    #[error("OpenAI request failed: {0}")]
    Request(String),

    /// Failed to parse response, or it had no choices.
    #[error("OpenAI response error: {0}")]
    Response(String),

    /// `OpenAI` answered with a non-success status.
    #[error("OpenAI API error ({status})")]
    Api {
        status: u16,
        /// Response body as JSON, or as a string when it was not JSON.
        body: serde_json::Value,
    },
}
