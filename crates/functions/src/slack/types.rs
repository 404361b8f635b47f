//! Request and response shapes for the Slack Web API methods in use.
//!
//! Every Slack response carries `ok` and, when false, an `error` code; the
//! client checks those before deserializing into these types.

use serde::{Deserialize, Serialize};

/// `chat.postMessage` body.
#[derive(Debug, Clone, Serialize)]
pub struct PostMessageRequest<'a> {
    pub channel: &'a str,
    pub text: &'a str,
}

/// `chat.postMessage` response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostMessageResponse {
    /// Channel ID the message landed in.
    #[serde(default)]
    pub channel: Option<String>,
    /// Message timestamp (Slack's message ID).
    #[serde(default)]
    pub ts: Option<String>,
}

/// `auth.test` response.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AuthTestResponse {
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub team: Option<String>,
    #[serde(default)]
    pub user: Option<String>,
    #[serde(default)]
    pub team_id: Option<String>,
    #[serde(default)]
    pub user_id: Option<String>,
    #[serde(default)]
    pub bot_id: Option<String>,
}

/// A channel as listed by `conversations.list`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Channel {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub is_private: bool,
    #[serde(default)]
    pub is_member: bool,
}

/// `conversations.list` response.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ConversationsListResponse {
    #[serde(default)]
    pub channels: Vec<Channel>,
}

/// `conversations.join` body.
#[derive(Debug, Clone, Serialize)]
pub(crate) struct JoinRequest<'a> {
    pub channel: &'a str,
}

/// `conversations.join` response.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct JoinResponse {
    #[serde(default)]
    pub channel: Option<Channel>,
}
