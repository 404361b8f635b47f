//! Integration tests for the Slack post flow through the functions server.
//!
//! Each test counts the Slack calls the flow makes, since the number of
//! lookups, joins and retries is the behaviour under test.

use serde_json::json;
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use scrum_master_integration_tests::{FunctionsServer, slack_config};

async fn post(server: &FunctionsServer, body: serde_json::Value) -> (u16, serde_json::Value) {
    let response = reqwest::Client::new()
        .post(server.url("/functions/slack-post-message"))
        .json(&body)
        .send()
        .await
        .expect("request");
    let status = response.status().as_u16();
    (status, response.json().await.expect("json body"))
}

fn channel_list() -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({
        "ok": true,
        "channels": [
            {"id": "C0RANDOM01", "name": "random"},
            {"id": "C0GENERAL1", "name": "general"},
            {"id": "C0GENERAL2", "name": "general"}
        ]
    }))
}

fn posted(channel: &str, ts: &str) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({"ok": true, "channel": channel, "ts": ts}))
}

fn slack_error(code: &str) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({"ok": false, "error": code}))
}

// =============================================================================
// Join and retry
// =============================================================================

#[tokio::test]
async fn test_not_in_channel_joins_once_and_retries_once() {
    let slack = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/conversations.list"))
        .respond_with(channel_list())
        .expect(1)
        .mount(&slack)
        .await;
    Mock::given(method("POST"))
        .and(path("/chat.postMessage"))
        .respond_with(slack_error("not_in_channel"))
        .up_to_n_times(1)
        .expect(1)
        .mount(&slack)
        .await;
    Mock::given(method("POST"))
        .and(path("/conversations.join"))
        .and(body_partial_json(json!({"channel": "C0GENERAL1"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ok": true})))
        .expect(1)
        .mount(&slack)
        .await;
    Mock::given(method("POST"))
        .and(path("/chat.postMessage"))
        .and(body_partial_json(json!({"channel": "C0GENERAL1", "text": "hi"})))
        .respond_with(posted("C0GENERAL1", "1712345678.000200"))
        .expect(1)
        .mount(&slack)
        .await;

    let server = FunctionsServer::start(slack_config(&slack.uri())).await;
    let (status, body) = post(&server, json!({"channel": "general", "text": "hi"})).await;

    assert_eq!(status, 200);
    assert_eq!(body["ok"], true);
    assert_eq!(body["ts"], "1712345678.000200");
    assert_eq!(body["joined"], true);
}

#[tokio::test]
async fn test_failed_retry_is_reported_with_slack_code() {
    let slack = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat.postMessage"))
        .respond_with(slack_error("not_in_channel"))
        .expect(2)
        .mount(&slack)
        .await;
    Mock::given(method("POST"))
        .and(path("/conversations.join"))
        .respond_with(slack_error("method_not_supported_for_channel_type"))
        .expect(1)
        .mount(&slack)
        .await;

    let server = FunctionsServer::start(slack_config(&slack.uri())).await;
    let (status, body) = post(&server, json!({"channel": "D0DIRECT01", "text": "hi"})).await;

    assert_eq!(status, 400);
    assert_eq!(
        body,
        json!({"error": "Slack API error", "details": "not_in_channel"})
    );
}

#[tokio::test]
async fn test_other_errors_do_not_join() {
    let slack = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat.postMessage"))
        .respond_with(slack_error("ratelimited"))
        .expect(1)
        .mount(&slack)
        .await;
    Mock::given(method("POST"))
        .and(path("/conversations.join"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ok": true})))
        .expect(0)
        .mount(&slack)
        .await;

    let server = FunctionsServer::start(slack_config(&slack.uri())).await;
    let (status, body) = post(&server, json!({"channel": "C0GENERAL1", "text": "hi"})).await;

    assert_eq!(status, 400);
    assert_eq!(body["details"], "ratelimited");
}

// =============================================================================
// Channel resolution
// =============================================================================

#[tokio::test]
async fn test_channel_id_skips_lookup() {
    let slack = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/conversations.list"))
        .respond_with(channel_list())
        .expect(0)
        .mount(&slack)
        .await;
    Mock::given(method("POST"))
        .and(path("/chat.postMessage"))
        .and(body_partial_json(json!({"channel": "G0PRIVATE1"})))
        .respond_with(posted("G0PRIVATE1", "1.0"))
        .expect(1)
        .mount(&slack)
        .await;

    let server = FunctionsServer::start(slack_config(&slack.uri())).await;
    let (status, body) = post(&server, json!({"channel": "G0PRIVATE1", "text": "hi"})).await;

    assert_eq!(status, 200);
    assert_eq!(body["joined"], false);
    assert!(body.get("resolved_from").is_none());
}

#[tokio::test]
async fn test_hash_prefixed_name_resolves_to_first_match() {
    let slack = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/conversations.list"))
        .respond_with(channel_list())
        .expect(1)
        .mount(&slack)
        .await;
    Mock::given(method("POST"))
        .and(path("/chat.postMessage"))
        .and(body_partial_json(json!({"channel": "C0GENERAL1"})))
        .respond_with(posted("C0GENERAL1", "2.0"))
        .expect(1)
        .mount(&slack)
        .await;

    let server = FunctionsServer::start(slack_config(&slack.uri())).await;
    let (status, body) = post(&server, json!({"channel": "#general", "text": "hi"})).await;

    assert_eq!(status, 200);
    assert_eq!(body["channel"], "C0GENERAL1");
    assert_eq!(body["resolved_from"], "general");
}

#[tokio::test]
async fn test_unknown_name_is_posted_as_given() {
    let slack = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/conversations.list"))
        .respond_with(channel_list())
        .expect(1)
        .mount(&slack)
        .await;
    Mock::given(method("POST"))
        .and(path("/chat.postMessage"))
        .and(body_partial_json(json!({"channel": "standups"})))
        .respond_with(slack_error("channel_not_found"))
        .expect(1)
        .mount(&slack)
        .await;

    let server = FunctionsServer::start(slack_config(&slack.uri())).await;
    let (status, body) = post(&server, json!({"channel": "standups", "text": "hi"})).await;

    assert_eq!(status, 400);
    assert_eq!(body["details"], "channel_not_found");
}
