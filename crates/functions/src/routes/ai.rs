//! `OpenAI` functions.

use axum::{Json, extract::State, extract::rejection::JsonRejection};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use super::{FunctionResult, ok, parse_body, required};
use crate::openai::Usage;
use crate::state::AppState;

const PING_PROMPT: &str = "Reply with the single word: pong";

const SCRUM_MASTER_PROMPT: &str = "You are an AI Scrum Master. Help the team with sprint \
     planning, backlog refinement, standups and delivery risks. Be concise and practical.";

#[derive(Debug, Serialize)]
pub struct Reply {
    pub model: String,
    pub reply: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub usage: Option<Usage>,
}

/// Check the API key with one tiny completion.
#[instrument(skip(state))]
pub async fn openai_check(State(state): State<AppState>) -> FunctionResult<Reply> {
    let openai = state.openai()?;
    let completion = openai.complete(None, PING_PROMPT).await?;
    Ok(ok(Reply {
        model: completion.model,
        reply: completion.content,
        usage: None,
    }))
}

#[derive(Debug, Deserialize)]
pub struct ChatBody {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub system: Option<String>,
}

/// Single-turn chat with the Scrum Master persona unless `system` overrides it.
#[instrument(skip(state, payload))]
pub async fn chat(
    State(state): State<AppState>,
    payload: Result<Json<ChatBody>, JsonRejection>,
) -> FunctionResult<Reply> {
    let openai = state.openai()?;
    let body = parse_body(payload)?;
    let message = required(body.message, "message")?;
    let system = body
        .system
        .filter(|s| !s.trim().is_empty())
        .unwrap_or_else(|| SCRUM_MASTER_PROMPT.to_string());

    let completion = openai.complete(Some(&system), &message).await?;
    Ok(ok(Reply {
        model: completion.model,
        reply: completion.content,
        usage: completion.usage,
    }))
}
