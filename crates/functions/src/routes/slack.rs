//! Slack functions.

use axum::{Json, extract::State, extract::rejection::JsonRejection};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

use super::{FunctionResult, ok, parse_body, required};
use crate::slack::{AuthTestResponse, Channel, PostOutcome, post_to_channel};
use crate::state::AppState;

/// Check the bot token with `auth.test`.
#[instrument(skip(state))]
pub async fn auth_check(State(state): State<AppState>) -> FunctionResult<AuthTestResponse> {
    let slack = state.slack()?;
    let auth = slack.auth_test().await?;
    Ok(ok(auth))
}

#[derive(Debug, Serialize)]
pub struct ChannelList {
    pub channels: Vec<Channel>,
    pub count: usize,
}

/// List channels visible to the bot.
#[instrument(skip(state))]
pub async fn channels(State(state): State<AppState>) -> FunctionResult<ChannelList> {
    let slack = state.slack()?;
    let channels = slack.list_channels().await?;
    Ok(ok(ChannelList {
        count: channels.len(),
        channels,
    }))
}

#[derive(Debug, Deserialize)]
pub struct PostMessageBody {
    #[serde(default)]
    pub channel: Option<String>,
    #[serde(default)]
    pub text: Option<String>,
}

/// Post a message, resolving the channel and joining it if needed.
#[instrument(skip(state, payload))]
pub async fn post_message(
    State(state): State<AppState>,
    payload: Result<Json<PostMessageBody>, JsonRejection>,
) -> FunctionResult<PostOutcome> {
    let slack = state.slack()?;
    let body = parse_body(payload)?;
    let channel = required(body.channel, "channel")?;
    let text = required(body.text, "text")?;

    let outcome = post_to_channel(&slack, &channel, &text).await?;
    info!(
        channel = %outcome.channel,
        ts = %outcome.ts,
        joined = outcome.joined,
        "Slack message posted"
    );
    Ok(ok(outcome))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use axum::http::StatusCode;
    use secrecy::SecretString;
    use serde_json::json;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use crate::config::FunctionsConfig;
    use crate::routes::test_support::{app, send};

    fn config(server: &MockServer, token: Option<&str>) -> FunctionsConfig {
        let mut config = FunctionsConfig::default();
        config.slack.api_url = server.uri();
        config.slack.bot_token = token.map(SecretString::from);
        config
    }

    #[tokio::test]
    async fn test_missing_token_fails_before_network() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ok": true})))
            .expect(0)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ok": true})))
            .expect(0)
            .mount(&server)
            .await;

        for (verb, uri, body) in [
            ("GET", "/functions/slack-auth-check", None),
            ("GET", "/functions/slack-channels", None),
            (
                "POST",
                "/functions/slack-post-message",
                Some(json!({"channel": "general", "text": "hi"})),
            ),
        ] {
            let (status, body) = send(app(config(&server, None)), verb, uri, body).await;
            assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR, "{uri}");
            assert_eq!(body, json!({"error": "SLACK_BOT_TOKEN is not configured"}));
        }
    }

    #[tokio::test]
    async fn test_auth_check_success_envelope() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/auth.test"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "ok": true,
                "team": "Acme",
                "user": "scrumbot",
                "bot_id": "B789"
            })))
            .mount(&server)
            .await;

        let (status, body) = send(
            app(config(&server, Some("xoxb-test"))),
            "POST",
            "/functions/slack-auth-check",
            None,
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["ok"], true);
        assert_eq!(body["team"], "Acme");
    }

    #[tokio::test]
    async fn test_auth_check_forwards_slack_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/auth.test"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"ok": false, "error": "invalid_auth"})),
            )
            .mount(&server)
            .await;

        let (status, body) = send(
            app(config(&server, Some("xoxb-bad"))),
            "GET",
            "/functions/slack-auth-check",
            None,
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            body,
            json!({"error": "Slack API error", "details": "invalid_auth"})
        );
    }

    #[tokio::test]
    async fn test_auth_check_text_error_status_is_bad_request() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/auth.test"))
            .respond_with(ResponseTemplate::new(503).set_body_string("upstream connect error"))
            .mount(&server)
            .await;

        let (status, body) = send(
            app(config(&server, Some("xoxb-test"))),
            "GET",
            "/functions/slack-auth-check",
            None,
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Slack API error (503)");
        assert_eq!(body["details"], "upstream connect error");
    }

    #[tokio::test]
    async fn test_channels_lists_with_count() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/conversations.list"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "ok": true,
                "channels": [{"id": "C0001AAAA", "name": "general"}]
            })))
            .mount(&server)
            .await;

        let (status, body) = send(
            app(config(&server, Some("xoxb-test"))),
            "GET",
            "/functions/slack-channels",
            None,
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["count"], 1);
        assert_eq!(body["channels"][0]["name"], "general");
    }

    #[tokio::test]
    async fn test_post_message_requires_text() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ok": true})))
            .expect(0)
            .mount(&server)
            .await;

        let (status, body) = send(
            app(config(&server, Some("xoxb-test"))),
            "POST",
            "/functions/slack-post-message",
            Some(json!({"channel": "general", "text": "  "})),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({"error": "text is required"}));
    }

    #[tokio::test]
    async fn test_post_message_joins_and_returns_retry_ts() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/conversations.list"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "ok": true,
                "channels": [{"id": "C0GENERAL1", "name": "general"}]
            })))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(path("/chat.postMessage"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"ok": false, "error": "not_in_channel"})),
            )
            .up_to_n_times(1)
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(path("/conversations.join"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ok": true})))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(path("/chat.postMessage"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "ok": true,
                "channel": "C0GENERAL1",
                "ts": "1700000000.000300"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let (status, body) = send(
            app(config(&server, Some("xoxb-test"))),
            "POST",
            "/functions/slack-post-message",
            Some(json!({"channel": "general", "text": "hi"})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!({
                "ok": true,
                "channel": "C0GENERAL1",
                "ts": "1700000000.000300",
                "joined": true,
                "resolved_from": "general"
            })
        );
    }
}
