//! HTTP route handlers for the integration functions.
//!
//! # Route Structure
//!
//! ```text
//! GET|POST /functions/slack-auth-check    - Check the Slack bot token
//! GET|POST /functions/slack-channels      - List channels visible to the bot
//! POST     /functions/slack-post-message  - Post to a channel (resolve, join, retry)
//! GET|POST /functions/jira-auth-check     - Check Jira credentials
//! POST     /functions/jira-create-issue   - Create a Jira issue
//! GET|POST /functions/openai-check        - Check the OpenAI key with one completion
//! POST     /functions/ai-chat             - Single-turn chat completion
//! POST     /functions/standup-parse       - Split a standup message into sections
//! OPTIONS  /functions/*                   - CORS preflight, empty 200
//! ```

use axum::{
    Json, Router,
    extract::rejection::JsonRejection,
    middleware,
    routing::{get, post},
};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::cors::cors_middleware;
use crate::error::FunctionError;
use crate::state::AppState;

pub mod ai;
pub mod jira;
pub mod slack;
pub mod standup;

/// Create the function routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route(
            "/functions/slack-auth-check",
            get(slack::auth_check).post(slack::auth_check),
        )
        .route(
            "/functions/slack-channels",
            get(slack::channels).post(slack::channels),
        )
        .route("/functions/slack-post-message", post(slack::post_message))
        .route(
            "/functions/jira-auth-check",
            get(jira::auth_check).post(jira::auth_check),
        )
        .route("/functions/jira-create-issue", post(jira::create_issue))
        .route(
            "/functions/openai-check",
            get(ai::openai_check).post(ai::openai_check),
        )
        .route("/functions/ai-chat", post(ai::chat))
        .route("/functions/standup-parse", post(standup::parse))
        .layer(middleware::from_fn(cors_middleware))
}

/// Success envelope: `{"ok": true, ...fields}`.
#[derive(Debug, Serialize)]
pub struct Success<T> {
    ok: bool,
    #[serde(flatten)]
    body: T,
}

/// What every function handler returns.
pub type FunctionResult<T> = Result<Json<Success<T>>, FunctionError>;

/// Wrap `body` in the success envelope.
pub const fn ok<T>(body: T) -> Json<Success<T>> {
    Json(Success { ok: true, body })
}

/// Turn a JSON extraction failure into a 400 with the usual envelope.
///
/// Handlers take the payload as a `Result` so secrets can be checked first.
pub(crate) fn parse_body<T: DeserializeOwned>(
    payload: Result<Json<T>, JsonRejection>,
) -> Result<T, FunctionError> {
    payload
        .map(|Json(body)| body)
        .map_err(|rejection| FunctionError::BadRequest(rejection.body_text()))
}

/// A required string field that is missing or blank.
pub(crate) fn required(value: Option<String>, field: &str) -> Result<String, FunctionError> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .ok_or_else(|| FunctionError::BadRequest(format!("{field} is required")))
}
