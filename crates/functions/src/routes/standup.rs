//! Standup message parsing.

use axum::{Json, extract::rejection::JsonRejection};
use serde::Deserialize;
use tracing::{debug, instrument};

use scrum_master_core::{ParsedStandup, parse_standup_message};

use super::{FunctionResult, ok, parse_body, required};

#[derive(Debug, Deserialize)]
pub struct ParseBody {
    #[serde(default)]
    pub message: Option<String>,
}

/// Split a free-form standup message into its sections.
#[instrument(skip(payload))]
pub async fn parse(
    payload: Result<Json<ParseBody>, JsonRejection>,
) -> FunctionResult<ParsedStandup> {
    let body = parse_body(payload)?;
    let message = required(body.message, "message")?;

    let parsed = parse_standup_message(&message);
    debug!(
        has_blockers = !parsed.blockers.is_empty(),
        "Standup message parsed"
    );
    Ok(ok(parsed))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use axum::http::StatusCode;
    use serde_json::json;

    use crate::config::FunctionsConfig;
    use crate::routes::test_support::{app, send};

    #[tokio::test]
    async fn test_parse_splits_sections() {
        let (status, body) = send(
            app(FunctionsConfig::default()),
            "POST",
            "/functions/standup-parse",
            Some(json!({
                "message": "Yesterday: finished the login API\nToday: write tests\nBlockers: none"
            })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["ok"], true);
        assert_eq!(body["yesterday_work"], "finished the login API");
        assert_eq!(body["today_plan"], "write tests");
        assert_eq!(body["blockers"], "none");
    }

    #[tokio::test]
    async fn test_parse_requires_message() {
        let (status, body) = send(
            app(FunctionsConfig::default()),
            "POST",
            "/functions/standup-parse",
            Some(json!({})),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({"error": "message is required"}));
    }
}
