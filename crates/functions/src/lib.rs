//! AI Scrum Master integration functions.
//!
//! Small HTTP handlers that forward dashboard requests to Slack, Jira and
//! `OpenAI`. Each handler checks its secrets, makes the upstream call and
//! normalises the answer to `{"ok": true, ...}` or `{"error", "details"}`.
//!
//! The only non-trivial control flow is [`slack::post_to_channel`], which
//! resolves a channel name and joins and retries once when the bot is not
//! in the channel.

#![cfg_attr(not(test), forbid(unsafe_code))]

use axum::{Router, routing::get};

pub mod config;
pub mod cors;
pub mod error;
pub mod jira;
pub mod openai;
pub mod routes;
pub mod slack;
pub mod state;

pub use config::FunctionsConfig;
pub use error::FunctionError;
pub use state::AppState;

/// Build the application router.
///
/// Tracing and Sentry layers are added by the binary.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .merge(routes::routes())
        .with_state(state)
}

/// Liveness health check endpoint.
///
/// Returns "ok" if the server is running. Does not check upstreams.
async fn health() -> &'static str {
    "ok"
}
