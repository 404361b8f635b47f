//! Unified error handling for the integration functions.
//!
//! Every failure is answered with `{"error": <message>}`, plus `details`
//! when the upstream API said something worth forwarding.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

use crate::jira::JiraError;
use crate::openai::OpenAiError;
use crate::slack::SlackError;

/// Function-level error type.
#[derive(Debug, Error)]
pub enum FunctionError {
    /// A required secret is not set. Raised before any upstream call.
    #[error("{0} is not configured")]
    MissingConfig(&'static str),

    /// The caller's request is missing or has an invalid field.
    #[error("{0}")]
    BadRequest(String),

    /// The upstream API answered with an error.
    #[error("{message}")]
    Upstream {
        message: String,
        /// Upstream error code, status or body.
        details: Option<serde_json::Value>,
    },

    /// Anything else, including transport failures.
    #[error("{0}")]
    Internal(String),
}

impl FunctionError {
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::MissingConfig(_) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::BadRequest(_) | Self::Upstream { .. } => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for FunctionError {
    fn into_response(self) -> Response {
        let status = self.status();

        // Log server errors with Sentry
        if status.is_server_error() {
            let event_id = sentry::capture_error(&self);
            tracing::error!(
                error = %self,
                sentry_event_id = %event_id,
                "Function error"
            );
        } else {
            tracing::warn!(error = %self, "Function request failed");
        }

        let body = match &self {
            Self::Upstream {
                message,
                details: Some(details),
            } => json!({ "error": message, "details": details }),
            _ => json!({ "error": self.to_string() }),
        };

        (status, Json(body)).into_response()
    }
}

impl From<SlackError> for FunctionError {
    fn from(err: SlackError) -> Self {
        match err {
            SlackError::Api(code) => Self::Upstream {
                message: "Slack API error".to_string(),
                details: Some(serde_json::Value::String(code)),
            },
            SlackError::Http { status, body } => Self::Upstream {
                message: format!("Slack API error ({status})"),
                details: Some(body),
            },
            SlackError::Request(_) | SlackError::Response(_) => Self::Internal(err.to_string()),
        }
    }
}

impl From<JiraError> for FunctionError {
    fn from(err: JiraError) -> Self {
        match err {
            JiraError::Api { status, body } => Self::Upstream {
                message: format!("Jira API error ({status})"),
                details: Some(body),
            },
            JiraError::Request(_) | JiraError::Response(_) => Self::Internal(err.to_string()),
        }
    }
}

impl From<OpenAiError> for FunctionError {
    fn from(err: OpenAiError) -> Self {
        match err {
            OpenAiError::Api { status, body } => Self::Upstream {
                message: format!("OpenAI API error ({status})"),
                details: Some(body),
            },
            OpenAiError::Request(_) | OpenAiError::Response(_) => Self::Internal(err.to_string()),
        }
    }
}
