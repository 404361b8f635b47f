//! Jira Cloud REST client using Basic auth (account email + API token).

use reqwest::Client;
use reqwest::header::ACCEPT;
use secrecy::{ExposeSecret, SecretString};
use serde::de::DeserializeOwned;
use tracing::{debug, error, instrument};

use super::error::JiraError;
use super::types::{CreatedIssue, JiraUser, NewIssue};
use crate::config::JiraCredentials;

/// Jira API client.
#[derive(Clone)]
pub struct JiraClient {
    client: Client,
    /// Site URL, without trailing slash.
    base_url: String,
    email: String,
    api_token: SecretString,
}

impl std::fmt::Debug for JiraClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JiraClient")
            .field("base_url", &self.base_url)
            .field("email", &self.email)
            .field("api_token", &"[REDACTED]")
            .finish_non_exhaustive()
    }
}

impl JiraClient {
    /// Create a new Jira client sharing an existing HTTP client.
    #[must_use]
    pub fn new(client: Client, credentials: JiraCredentials<'_>) -> Self {
        Self {
            client,
            base_url: credentials.base_url.trim_end_matches('/').to_string(),
            email: credentials.email.to_string(),
            api_token: credentials.api_token.clone(),
        }
    }

    /// Site URL the client talks to.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Browser URL of an issue.
    #[must_use]
    pub fn browse_url(&self, key: &str) -> String {
        format!("{}/browse/{key}", self.base_url)
    }

    /// The user the credentials belong to.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails or Jira rejects the credentials.
    #[instrument(skip(self), fields(base_url = %self.base_url))]
    pub async fn myself(&self) -> Result<JiraUser, JiraError> {
        let response = self
            .client
            .get(format!("{}/rest/api/3/myself", self.base_url))
            .basic_auth(&self.email, Some(self.api_token.expose_secret()))
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| JiraError::Request(e.to_string()))?;

        handle_response(response).await
    }

    /// Create an issue.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails or Jira rejects the issue.
    #[instrument(skip(self, issue), fields(project = %issue.project_key))]
    pub async fn create_issue(&self, issue: &NewIssue) -> Result<CreatedIssue, JiraError> {
        let response = self
            .client
            .post(format!("{}/rest/api/3/issue", self.base_url))
            .basic_auth(&self.email, Some(self.api_token.expose_secret()))
            .header(ACCEPT, "application/json")
            .json(&issue.to_request_body())
            .send()
            .await
            .map_err(|e| JiraError::Request(e.to_string()))?;

        let created: CreatedIssue = handle_response(response).await?;
        debug!(key = %created.key, "Jira issue created");
        Ok(created)
    }
}

async fn handle_response<T: DeserializeOwned>(
    response: reqwest::Response,
) -> Result<T, JiraError> {
    let status = response.status();
    let text = response
        .text()
        .await
        .map_err(|e| JiraError::Response(e.to_string()))?;

    if !status.is_success() {
        error!(status = status.as_u16(), "Jira API error");
        let body = serde_json::from_str(&text).unwrap_or(serde_json::Value::String(text));
        return Err(JiraError::Api {
            status: status.as_u16(),
            body,
        });
    }

    serde_json::from_str(&text).map_err(|e| JiraError::Response(e.to_string()))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use serde_json::json;
    use wiremock::matchers::{body_partial_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    fn client(server: &MockServer) -> JiraClient {
        let token = SecretString::from("api-token");
        let base_url = server.uri();
        JiraClient::new(
            Client::new(),
            JiraCredentials {
                base_url: &base_url,
                email: "bot@acme.dev",
                api_token: &token,
            },
        )
    }

    #[tokio::test]
    async fn test_myself_uses_basic_auth() {
        let server = MockServer::start().await;
        // base64("bot@acme.dev:api-token")
        Mock::given(method("GET"))
            .and(path("/rest/api/3/myself"))
            .and(header(
                "authorization",
                "Basic Ym90QGFjbWUuZGV2OmFwaS10b2tlbg==",
            ))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "accountId": "5b10a2844c20165700ede21g",
                "displayName": "Scrum Bot",
                "emailAddress": "bot@acme.dev",
                "active": true
            })))
            .expect(1)
            .mount(&server)
            .await;

        let user = client(&server).myself().await.unwrap();
        assert_eq!(user.display_name.as_deref(), Some("Scrum Bot"));
    }

    #[tokio::test]
    async fn test_create_issue() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/rest/api/3/issue"))
            .and(body_partial_json(json!({
                "fields": {"project": {"key": "SCRUM"}, "issuetype": {"name": "Task"}}
            })))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({
                "id": "10001",
                "key": "SCRUM-42",
                "self": "https://acme.atlassian.net/rest/api/3/issue/10001"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let jira = client(&server);
        let created = jira
            .create_issue(&NewIssue {
                project_key: "SCRUM".to_string(),
                summary: "Add rate limiting".to_string(),
                description: None,
                issue_type: "Task".to_string(),
                priority: None,
            })
            .await
            .unwrap();

        assert_eq!(created.key, "SCRUM-42");
        assert_eq!(
            jira.browse_url(&created.key),
            format!("{}/browse/SCRUM-42", server.uri())
        );
    }

    #[tokio::test]
    async fn test_error_body_is_kept() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/rest/api/3/myself"))
            .respond_with(ResponseTemplate::new(401).set_body_string("Unauthorized"))
            .mount(&server)
            .await;

        let err = client(&server).myself().await.unwrap_err();
        match err {
            JiraError::Api { status, body } => {
                assert_eq!(status, 401);
                assert_eq!(body, json!("Unauthorized"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
