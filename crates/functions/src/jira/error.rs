//! Jira-related errors.

use thiserror::Error;

/// Errors that can occur when interacting with Jira.
#[derive(Debug, Error)]
pub enum JiraError {
    /// HTTP request failed.
    #[error("Jira request failed: {0}")]
    Request(String),

    /// Failed to parse response.
    #[error("Jira response error: {0}")]
    Response(String),

    /// Jira answered with a non-success status.
    #[error("Jira API error ({status})")]
    Api {
        status: u16,
        /// Response body as JSON, or as a string when it was not JSON.
        body: serde_json::Value,
    },
}
