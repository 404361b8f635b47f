//! Slack Web API client.

use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use serde::de::DeserializeOwned;
use tracing::{debug, error, instrument};

use super::error::SlackError;
use super::types::{
    AuthTestResponse, Channel, ConversationsListResponse, JoinRequest, JoinResponse,
    PostMessageRequest, PostMessageResponse,
};

/// Page size for `conversations.list`.
const CHANNEL_LIST_LIMIT: &str = "1000";

/// Slack API client authenticated with a bot token.
#[derive(Clone)]
pub struct SlackClient {
    /// HTTP client.
    client: Client,
    /// Bot token for authentication.
    bot_token: SecretString,
    /// Web API base URL, without trailing slash.
    api_url: String,
}

impl std::fmt::Debug for SlackClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SlackClient")
            .field("bot_token", &"[REDACTED]")
            .field("api_url", &self.api_url)
            .finish_non_exhaustive()
    }
}

impl SlackClient {
    /// Create a new Slack client sharing an existing HTTP client.
    #[must_use]
    pub fn new(client: Client, bot_token: SecretString, api_url: impl Into<String>) -> Self {
        Self {
            client,
            bot_token,
            api_url: api_url.into(),
        }
    }

    /// Check the bot token (`auth.test`).
    ///
    /// # Errors
    ///
    /// Returns error if the API request fails or Slack returns an error.
    #[instrument(skip(self))]
    pub async fn auth_test(&self) -> Result<AuthTestResponse, SlackError> {
        let response = self
            .client
            .post(self.method_url("auth.test"))
            .bearer_auth(self.bot_token.expose_secret())
            .send()
            .await
            .map_err(|e| SlackError::Request(e.to_string()))?;

        parse_slack_response(response, "auth.test").await
    }

    /// List public and private channels visible to the bot
    /// (`conversations.list`, archived channels excluded).
    ///
    /// # Errors
    ///
    /// Returns error if the API request fails or Slack returns an error.
    #[instrument(skip(self))]
    pub async fn list_channels(&self) -> Result<Vec<Channel>, SlackError> {
        let response = self
            .client
            .get(self.method_url("conversations.list"))
            .bearer_auth(self.bot_token.expose_secret())
            .query(&[
                ("types", "public_channel,private_channel"),
                ("exclude_archived", "true"),
                ("limit", CHANNEL_LIST_LIMIT),
            ])
            .send()
            .await
            .map_err(|e| SlackError::Request(e.to_string()))?;

        let list: ConversationsListResponse =
            parse_slack_response(response, "conversations.list").await?;

        debug!(count = list.channels.len(), "Listed Slack channels");
        Ok(list.channels)
    }

    /// Join a channel (`conversations.join`).
    ///
    /// # Errors
    ///
    /// Returns error if the API request fails or Slack returns an error.
    #[instrument(skip(self), fields(channel = %channel))]
    pub async fn join_channel(&self, channel: &str) -> Result<Option<Channel>, SlackError> {
        let response = self
            .client
            .post(self.method_url("conversations.join"))
            .bearer_auth(self.bot_token.expose_secret())
            .json(&JoinRequest { channel })
            .send()
            .await
            .map_err(|e| SlackError::Request(e.to_string()))?;

        let joined: JoinResponse = parse_slack_response(response, "conversations.join").await?;
        Ok(joined.channel)
    }

    /// Post a plain-text message (`chat.postMessage`).
    ///
    /// # Errors
    ///
    /// Returns error if the API request fails or Slack returns an error.
    #[instrument(skip(self, text), fields(channel = %channel))]
    pub async fn post_message(
        &self,
        channel: &str,
        text: &str,
    ) -> Result<PostMessageResponse, SlackError> {
        let response = self
            .client
            .post(self.method_url("chat.postMessage"))
            .bearer_auth(self.bot_token.expose_secret())
            .json(&PostMessageRequest { channel, text })
            .send()
            .await
            .map_err(|e| SlackError::Request(e.to_string()))?;

        let result: PostMessageResponse =
            parse_slack_response(response, "chat.postMessage").await?;

        debug!(
            ts = ?result.ts,
            channel = ?result.channel,
            "Message posted to Slack"
        );

        Ok(result)
    }

    fn method_url(&self, method: &str) -> String {
        format!("{}/{method}", self.api_url)
    }
}

/// Check the HTTP status and Slack's `ok` flag, then deserialize the rest
/// of the body.
///
/// An `ok: false` body yields its error code whatever the status (Slack
/// sends `ratelimited` with a 429). A non-success status without a code
/// keeps the status and body for the caller.
async fn parse_slack_response<T: DeserializeOwned>(
    response: reqwest::Response,
    method: &str,
) -> Result<T, SlackError> {
    let status = response.status();
    let text = response
        .text()
        .await
        .map_err(|e| SlackError::Response(e.to_string()))?;

    let body: serde_json::Value = match serde_json::from_str(&text) {
        Ok(body) => body,
        Err(_) if !status.is_success() => {
            error!(method, status = status.as_u16(), "Slack HTTP error");
            return Err(SlackError::Http {
                status: status.as_u16(),
                body: serde_json::Value::String(text),
            });
        }
        Err(e) => return Err(SlackError::Response(format!("{method}: {e}"))),
    };

    if body.get("ok").and_then(serde_json::Value::as_bool) != Some(true) {
        let code = body.get("error").and_then(serde_json::Value::as_str);
        if code.is_none() && !status.is_success() {
            error!(method, status = status.as_u16(), "Slack HTTP error");
            return Err(SlackError::Http {
                status: status.as_u16(),
                body,
            });
        }
        let code = code.unwrap_or("unknown_error").to_string();
        error!(method, error = %code, "Slack API error");
        return Err(SlackError::Api(code));
    }

    serde_json::from_value(body).map_err(|e| SlackError::Response(format!("{method}: {e}")))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use serde_json::json;
    use wiremock::matchers::{body_json, header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    fn client(server: &MockServer) -> SlackClient {
        SlackClient::new(
            Client::new(),
            SecretString::from("xoxb-test"),
            server.uri(),
        )
    }

    #[tokio::test]
    async fn test_auth_test_sends_bearer_token() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/auth.test"))
            .and(header("authorization", "Bearer xoxb-test"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "ok": true,
                "team": "Acme",
                "user": "scrumbot",
                "team_id": "T123",
                "user_id": "U456",
                "bot_id": "B789"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let auth = client(&server).auth_test().await.unwrap();
        assert_eq!(auth.team.as_deref(), Some("Acme"));
        assert_eq!(auth.bot_id.as_deref(), Some("B789"));
    }

    #[tokio::test]
    async fn test_ok_false_becomes_api_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/auth.test"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"ok": false, "error": "invalid_auth"})),
            )
            .mount(&server)
            .await;

        let err = client(&server).auth_test().await.unwrap_err();
        assert_eq!(err.api_code(), Some("invalid_auth"));
    }

    #[tokio::test]
    async fn test_list_channels_query() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/conversations.list"))
            .and(query_param("types", "public_channel,private_channel"))
            .and(query_param("exclude_archived", "true"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "ok": true,
                "channels": [
                    {"id": "C0001AAAA", "name": "general", "is_member": true},
                    {"id": "G0002BBBB", "name": "eng-private", "is_private": true}
                ]
            })))
            .mount(&server)
            .await;

        let channels = client(&server).list_channels().await.unwrap();
        assert_eq!(channels.len(), 2);
        assert!(channels.iter().any(|c| c.is_private && c.name == "eng-private"));
    }

    #[tokio::test]
    async fn test_post_message_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/chat.postMessage"))
            .and(body_json(json!({"channel": "C0001AAAA", "text": "hi"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "ok": true,
                "channel": "C0001AAAA",
                "ts": "1700000000.000100"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let posted = client(&server)
            .post_message("C0001AAAA", "hi")
            .await
            .unwrap();
        assert_eq!(posted.ts.as_deref(), Some("1700000000.000100"));
    }

    #[tokio::test]
    async fn test_non_json_error_status_keeps_status_and_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/auth.test"))
            .respond_with(ResponseTemplate::new(502).set_body_string("Bad Gateway"))
            .mount(&server)
            .await;

        let err = client(&server).auth_test().await.unwrap_err();
        match err {
            SlackError::Http { status, body } => {
                assert_eq!(status, 502);
                assert_eq!(body, json!("Bad Gateway"));
            }
            other => panic!("expected Http error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_rate_limit_keeps_slack_code() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/chat.postMessage"))
            .respond_with(
                ResponseTemplate::new(429)
                    .set_body_json(json!({"ok": false, "error": "ratelimited"})),
            )
            .mount(&server)
            .await;

        let err = client(&server)
            .post_message("C0001AAAA", "hi")
            .await
            .unwrap_err();
        assert_eq!(err.api_code(), Some("ratelimited"));
    }

    #[tokio::test]
    async fn test_non_json_success_is_response_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/auth.test"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html></html>"))
            .mount(&server)
            .await;

        let err = client(&server).auth_test().await.unwrap_err();
        assert!(matches!(err, SlackError::Response(_)));
    }
}
