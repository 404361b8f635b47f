//! `OpenAI` Chat Completions client.

use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use tracing::{debug, error, instrument};

use super::error::OpenAiError;
use super::types::{ChatCompletion, ChatCompletionRequest, ChatCompletionResponse, ChatMessage};

/// Sampling temperature for every completion.
pub const TEMPERATURE: f64 = 0.2;

/// Client for single-turn chat completions.
#[derive(Clone)]
pub struct OpenAiClient {
    client: Client,
    api_key: SecretString,
    model: String,
    /// API base URL, without trailing slash.
    api_url: String,
}

impl std::fmt::Debug for OpenAiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenAiClient")
            .field("api_key", &"[REDACTED]")
            .field("model", &self.model)
            .field("api_url", &self.api_url)
            .finish_non_exhaustive()
    }
}

impl OpenAiClient {
    /// Create a new client sharing an existing HTTP client.
    #[must_use]
    pub fn new(
        client: Client,
        api_key: SecretString,
        model: impl Into<String>,
        api_url: impl Into<String>,
    ) -> Self {
        Self {
            client,
            api_key,
            model: model.into(),
            api_url: api_url.into(),
        }
    }

    #[must_use]
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Send one user message, with an optional system prompt, and return the
    /// first choice.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, `OpenAI` returns an error
    /// status, or the response has no choices.
    #[instrument(
        skip(self, system, prompt),
        fields(model = %self.model, prompt_len = prompt.len())
    )]
    pub async fn complete(
        &self,
        system: Option<&str>,
        prompt: &str,
    ) -> Result<ChatCompletion, OpenAiError> {
        let mut messages = Vec::with_capacity(2);
        if let Some(system) = system {
            messages.push(ChatMessage::system(system));
        }
        messages.push(ChatMessage::user(prompt));

        let request = ChatCompletionRequest {
            model: &self.model,
            messages,
            temperature: TEMPERATURE,
        };

        let response = self
            .client
            .post(format!("{}/chat/completions", self.api_url))
            .bearer_auth(self.api_key.expose_secret())
            .json(&request)
            .send()
            .await
            .map_err(|e| OpenAiError::Request(e.to_string()))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| OpenAiError::Response(e.to_string()))?;

        if !status.is_success() {
            error!(status = status.as_u16(), "OpenAI API error");
            let body = serde_json::from_str(&text).unwrap_or(serde_json::Value::String(text));
            return Err(OpenAiError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let response: ChatCompletionResponse =
            serde_json::from_str(&text).map_err(|e| OpenAiError::Response(e.to_string()))?;

        let content = response
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .ok_or_else(|| OpenAiError::Response("No choices in response".to_string()))?;

        debug!(usage = ?response.usage, "Chat completion received");

        Ok(ChatCompletion {
            model: response.model.unwrap_or_else(|| self.model.clone()),
            content,
            usage: response.usage,
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use serde_json::json;
    use wiremock::matchers::{body_partial_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    fn client(server: &MockServer) -> OpenAiClient {
        OpenAiClient::new(
            Client::new(),
            SecretString::from("sk-test"),
            "gpt-4o-mini",
            server.uri(),
        )
    }

    #[tokio::test]
    async fn test_complete_sends_single_turn_request() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .and(header("authorization", "Bearer sk-test"))
            .and(body_partial_json(json!({
                "model": "gpt-4o-mini",
                "temperature": 0.2,
                "messages": [
                    {"role": "system", "content": "Be brief."},
                    {"role": "user", "content": "ping"}
                ]
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "model": "gpt-4o-mini-2024-07-18",
                "choices": [{"index": 0, "message": {"role": "assistant", "content": "pong"}}],
                "usage": {"prompt_tokens": 12, "completion_tokens": 1, "total_tokens": 13}
            })))
            .expect(1)
            .mount(&server)
            .await;

        let completion = client(&server)
            .complete(Some("Be brief."), "ping")
            .await
            .unwrap();
        assert_eq!(completion.content, "pong");
        assert_eq!(completion.model, "gpt-4o-mini-2024-07-18");
        assert_eq!(completion.usage.map(|u| u.total_tokens), Some(13));
    }

    #[tokio::test]
    async fn test_error_status_keeps_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .respond_with(ResponseTemplate::new(401).set_body_json(json!({
                "error": {"message": "Incorrect API key provided", "type": "invalid_request_error"}
            })))
            .mount(&server)
            .await;

        let err = client(&server).complete(None, "ping").await.unwrap_err();
        match err {
            OpenAiError::Api { status, body } => {
                assert_eq!(status, 401);
                assert_eq!(
                    body.pointer("/error/message"),
                    Some(&json!("Incorrect API key provided"))
                );
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_empty_choices_is_response_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"choices": []})))
            .mount(&server)
            .await;

        let err = client(&server).complete(None, "ping").await.unwrap_err();
        assert!(matches!(err, OpenAiError::Response(_)));
    }
}
