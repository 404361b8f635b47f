//! Channel resolution and the join-and-retry post flow.
//!
//! ```text
//! RESOLVE_CHANNEL -> POST -> (not_in_channel) JOIN -> POST_RETRY -> DONE | FAILED
//! ```
//!
//! Resolution is skipped for references that already look like channel IDs.
//! Only `not_in_channel` triggers the join; the retry happens at most once,
//! after the join has finished whether or not it succeeded.

use serde::Serialize;
use tracing::{info, instrument, warn};

use super::client::SlackClient;
use super::error::SlackError;

/// Slack error code returned when the bot is not a member of the channel.
pub const NOT_IN_CHANNEL: &str = "not_in_channel";

/// Result of a successful post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PostOutcome {
    /// Channel ID the message was posted to.
    pub channel: String,
    /// Timestamp of the posted message.
    pub ts: String,
    /// Whether the bot had to join the channel first.
    pub joined: bool,
    /// The name the channel was resolved from, when a lookup found it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resolved_from: Option<String>,
}

/// Whether `reference` already has the shape of a channel ID.
///
/// Public (`C`), private/group (`G`) and DM (`D`) IDs: the prefix letter
/// followed by at least six uppercase letters or digits.
#[must_use]
pub fn is_channel_id(reference: &str) -> bool {
    let mut chars = reference.chars();
    let Some(prefix) = chars.next() else {
        return false;
    };
    let rest = chars.as_str();

    matches!(prefix, 'C' | 'G' | 'D')
        && rest.len() >= 6
        && rest
            .chars()
            .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit())
}

/// Turn a `#name`, bare name or channel ID into the ID to post to.
///
/// IDs are returned untouched without calling Slack. Names are looked up
/// with a single `conversations.list` call; the first channel whose name
/// matches exactly wins. When nothing matches, or the lookup itself fails,
/// the original reference is returned so the post can still be attempted.
///
/// Returns the channel to use and, if a lookup matched, the name it came from.
#[instrument(skip(slack))]
pub async fn resolve_channel(slack: &SlackClient, reference: &str) -> (String, Option<String>) {
    if is_channel_id(reference) {
        return (reference.to_string(), None);
    }

    let name = reference.strip_prefix('#').unwrap_or(reference);

    match slack.list_channels().await {
        Ok(channels) => channels
            .into_iter()
            .find(|c| c.name == name)
            .map_or_else(
                || {
                    info!(reference, "No channel matched, using reference as given");
                    (reference.to_string(), None)
                },
                |c| (c.id, Some(name.to_string())),
            ),
        Err(e) => {
            warn!(error = %e, reference, "Channel lookup failed, using reference as given");
            (reference.to_string(), None)
        }
    }
}

/// Resolve `reference`, post `text`, and on `not_in_channel` join and retry
/// once.
///
/// # Errors
///
/// Returns the first post's error when it is anything but `not_in_channel`,
/// or the retry's error when the retry fails too.
#[instrument(skip(slack, text))]
pub async fn post_to_channel(
    slack: &SlackClient,
    reference: &str,
    text: &str,
) -> Result<PostOutcome, SlackError> {
    let (channel, resolved_from) = resolve_channel(slack, reference).await;

    let (posted, joined) = match slack.post_message(&channel, text).await {
        Ok(posted) => (posted, false),
        Err(SlackError::Api(code)) if code == NOT_IN_CHANNEL => {
            info!(channel = %channel, "Bot is not in channel, joining before retry");
            if let Err(e) = slack.join_channel(&channel).await {
                warn!(error = %e, channel = %channel, "Joining channel failed, retrying anyway");
            }
            (slack.post_message(&channel, text).await?, true)
        }
        Err(e) => return Err(e),
    };

    Ok(PostOutcome {
        channel: posted.channel.unwrap_or(channel),
        ts: posted.ts.unwrap_or_default(),
        joined,
        resolved_from,
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use reqwest::Client;
    use secrecy::SecretString;
    use serde_json::json;
    use wiremock::matchers::{body_partial_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    fn client(server: &MockServer) -> SlackClient {
        SlackClient::new(
            Client::new(),
            SecretString::from("xoxb-test"),
            server.uri(),
        )
    }

    async fn mount_channels(server: &MockServer, expected_calls: u64) {
        Mock::given(method("GET"))
            .and(path("/conversations.list"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "ok": true,
                "channels": [
                    {"id": "C0GENERAL1", "name": "general"},
                    {"id": "C0GENERAL2", "name": "general"},
                    {"id": "C0RANDOM01", "name": "random"}
                ]
            })))
            .expect(expected_calls)
            .mount(server)
            .await;
    }

    fn ok_post(channel: &str, ts: &str) -> ResponseTemplate {
        ResponseTemplate::new(200).set_body_json(json!({"ok": true, "channel": channel, "ts": ts}))
    }

    fn failed(code: &str) -> ResponseTemplate {
        ResponseTemplate::new(200).set_body_json(json!({"ok": false, "error": code}))
    }

    #[test]
    fn test_is_channel_id() {
        assert!(is_channel_id("C0123ABCD"));
        assert!(is_channel_id("G012345"));
        assert!(is_channel_id("D9ZZZZZZZZ"));
        assert!(!is_channel_id("C01234"));
        assert!(!is_channel_id("general"));
        assert!(!is_channel_id("#C0123ABCD"));
        assert!(!is_channel_id("X0123ABCD"));
        assert!(!is_channel_id("C0123abcd"));
        assert!(!is_channel_id(""));
    }

    #[tokio::test]
    async fn test_channel_id_skips_lookup() {
        let server = MockServer::start().await;
        mount_channels(&server, 0).await;
        Mock::given(method("POST"))
            .and(path("/chat.postMessage"))
            .and(body_partial_json(json!({"channel": "C0123ABCD"})))
            .respond_with(ok_post("C0123ABCD", "1.0"))
            .expect(1)
            .mount(&server)
            .await;

        let outcome = post_to_channel(&client(&server), "C0123ABCD", "hi")
            .await
            .unwrap();
        assert_eq!(outcome.channel, "C0123ABCD");
        assert_eq!(outcome.resolved_from, None);
        assert!(!outcome.joined);
    }

    #[tokio::test]
    async fn test_name_resolves_to_first_exact_match() {
        let server = MockServer::start().await;
        mount_channels(&server, 1).await;
        Mock::given(method("POST"))
            .and(path("/chat.postMessage"))
            .and(body_partial_json(json!({"channel": "C0GENERAL1"})))
            .respond_with(ok_post("C0GENERAL1", "2.0"))
            .expect(1)
            .mount(&server)
            .await;

        let outcome = post_to_channel(&client(&server), "#general", "hi")
            .await
            .unwrap();
        assert_eq!(outcome.channel, "C0GENERAL1");
        assert_eq!(outcome.resolved_from.as_deref(), Some("general"));
    }

    #[tokio::test]
    async fn test_unmatched_name_posts_to_original_reference() {
        let server = MockServer::start().await;
        mount_channels(&server, 1).await;
        Mock::given(method("POST"))
            .and(path("/chat.postMessage"))
            .and(body_partial_json(json!({"channel": "#standups"})))
            .respond_with(failed("channel_not_found"))
            .expect(1)
            .mount(&server)
            .await;

        let err = post_to_channel(&client(&server), "#standups", "hi")
            .await
            .unwrap_err();
        assert_eq!(err.api_code(), Some("channel_not_found"));
    }

    #[tokio::test]
    async fn test_failed_lookup_is_best_effort() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/conversations.list"))
            .respond_with(failed("missing_scope"))
            .expect(1)
            .mount(&server)
            .await;

        let (channel, resolved_from) = resolve_channel(&client(&server), "general").await;
        assert_eq!(channel, "general");
        assert!(resolved_from.is_none());
    }

    #[tokio::test]
    async fn test_not_in_channel_joins_and_retries_once() {
        let server = MockServer::start().await;
        mount_channels(&server, 1).await;
        Mock::given(method("POST"))
            .and(path("/chat.postMessage"))
            .respond_with(failed(NOT_IN_CHANNEL))
            .up_to_n_times(1)
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(path("/conversations.join"))
            .and(body_partial_json(json!({"channel": "C0GENERAL1"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "ok": true,
                "channel": {"id": "C0GENERAL1", "name": "general"}
            })))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(path("/chat.postMessage"))
            .respond_with(ok_post("C0GENERAL1", "1700000000.000200"))
            .expect(1)
            .mount(&server)
            .await;

        let outcome = post_to_channel(&client(&server), "general", "hi")
            .await
            .unwrap();
        assert!(outcome.joined);
        assert_eq!(outcome.ts, "1700000000.000200");
    }

    #[tokio::test]
    async fn test_failed_join_still_retries() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/chat.postMessage"))
            .respond_with(failed(NOT_IN_CHANNEL))
            .expect(2)
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(path("/conversations.join"))
            .respond_with(failed("method_not_supported_for_channel_type"))
            .expect(1)
            .mount(&server)
            .await;

        let err = post_to_channel(&client(&server), "G0PRIVATE1", "hi")
            .await
            .unwrap_err();
        assert_eq!(err.api_code(), Some(NOT_IN_CHANNEL));
    }

    #[tokio::test]
    async fn test_other_errors_do_not_join() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/chat.postMessage"))
            .respond_with(failed("ratelimited"))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(path("/conversations.join"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ok": true})))
            .expect(0)
            .mount(&server)
            .await;

        let err = post_to_channel(&client(&server), "C0123ABCD", "hi")
            .await
            .unwrap_err();
        assert_eq!(err.api_code(), Some("ratelimited"));
    }
}
