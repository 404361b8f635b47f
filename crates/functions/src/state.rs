//! Application state shared across handlers.

use std::sync::Arc;

use crate::config::FunctionsConfig;
use crate::error::FunctionError;
use crate::jira::JiraClient;
use crate::openai::OpenAiClient;
use crate::slack::SlackClient;

/// Application state shared across all handlers.
///
/// Holds immutable configuration and one pooled HTTP client. Upstream
/// clients are built per request so each function checks its own secrets
/// before anything goes over the network.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: FunctionsConfig,
    http: reqwest::Client,
}

impl AppState {
    /// Build the state.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(config: FunctionsConfig) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("scrum-master-functions/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            inner: Arc::new(AppStateInner { config, http }),
        })
    }

    #[must_use]
    pub fn config(&self) -> &FunctionsConfig {
        &self.inner.config
    }

    /// Slack client, if `SLACK_BOT_TOKEN` is set.
    ///
    /// # Errors
    ///
    /// Returns `FunctionError::MissingConfig` otherwise.
    pub fn slack(&self) -> Result<SlackClient, FunctionError> {
        let slack = &self.inner.config.slack;
        Ok(SlackClient::new(
            self.inner.http.clone(),
            slack.require_token()?.clone(),
            slack.api_url.clone(),
        ))
    }

    /// Jira client, if the site URL, email and API token are all set.
    ///
    /// # Errors
    ///
    /// Returns `FunctionError::MissingConfig` naming the first missing variable.
    pub fn jira(&self) -> Result<JiraClient, FunctionError> {
        let credentials = self.inner.config.jira.require_credentials()?;
        Ok(JiraClient::new(self.inner.http.clone(), credentials))
    }

    /// `OpenAI` client, if `OPENAI_API_KEY` is set.
    ///
    /// # Errors
    ///
    /// Returns `FunctionError::MissingConfig` otherwise.
    pub fn openai(&self) -> Result<OpenAiClient, FunctionError> {
        let openai = &self.inner.config.openai;
        Ok(OpenAiClient::new(
            self.inner.http.clone(),
            openai.require_key()?.clone(),
            openai.model.clone(),
            openai.api_url.clone(),
        ))
    }
}
