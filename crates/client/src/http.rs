//! HTTP client wrapper for the backend API.
//!
//! Every request gets the base URL prefix, JSON default headers, the fixed
//! timeout and, when the session holds one, `Authorization: Bearer <token>`.
//! Responses all go through [`ApiClient::handle_response`].

use std::sync::Arc;

use reqwest::header::{ACCEPT, CONTENT_TYPE, HeaderMap, HeaderValue};
use reqwest::{Method, RequestBuilder, StatusCode};
use secrecy::ExposeSecret;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, instrument, warn};
use url::Url;

use crate::config::ClientConfig;
use crate::error::{ApiError, LOGIN_ROUTE, extract_error_message};
use crate::resources::{
    AgentsClient, AiClient, AnalyticsClient, BacklogClient, JiraClient, ProjectsClient,
    SprintsClient, StandupsClient, TeamsClient,
};
use crate::session::Session;

/// Backend API client.
///
/// Cheap to clone; clones share the connection pool and the session.
#[derive(Clone)]
pub struct ApiClient {
    inner: Arc<ApiClientInner>,
}

struct ApiClientInner {
    client: reqwest::Client,
    base_url: String,
    session: Session,
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.inner.base_url)
            .field("session", &self.inner.session)
            .finish_non_exhaustive()
    }
}

impl ApiClient {
    /// Create a new API client.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::InvalidConfig` if the base URL is invalid or the
    /// underlying HTTP client cannot be built.
    pub fn new(config: &ClientConfig, session: Session) -> Result<Self, ApiError> {
        Url::parse(&config.base_url).map_err(|e| ApiError::InvalidConfig(e.to_string()))?;

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(config.timeout)
            .user_agent(config.user_agent.as_str())
            .build()
            .map_err(|e| ApiError::InvalidConfig(e.to_string()))?;

        Ok(Self {
            inner: Arc::new(ApiClientInner {
                client,
                base_url: config.base_url.trim_end_matches('/').to_string(),
                session,
            }),
        })
    }

    /// The session whose token is attached to requests.
    #[must_use]
    pub fn session(&self) -> &Session {
        &self.inner.session
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.inner.base_url
    }

    // Resource accessors

    #[must_use]
    pub fn teams(&self) -> TeamsClient<'_> {
        TeamsClient::new(self)
    }

    #[must_use]
    pub fn projects(&self) -> ProjectsClient<'_> {
        ProjectsClient::new(self)
    }

    #[must_use]
    pub fn sprints(&self) -> SprintsClient<'_> {
        SprintsClient::new(self)
    }

    #[must_use]
    pub fn backlog(&self) -> BacklogClient<'_> {
        BacklogClient::new(self)
    }

    #[must_use]
    pub fn standups(&self) -> StandupsClient<'_> {
        StandupsClient::new(self)
    }

    #[must_use]
    pub fn ai(&self) -> AiClient<'_> {
        AiClient::new(self)
    }

    #[must_use]
    pub fn analytics(&self) -> AnalyticsClient<'_> {
        AnalyticsClient::new(self)
    }

    #[must_use]
    pub fn agents(&self) -> AgentsClient<'_> {
        AgentsClient::new(self)
    }

    #[must_use]
    pub fn jira(&self) -> JiraClient<'_> {
        JiraClient::new(self)
    }

    // Request helpers

    /// GET `path` and parse the JSON body.
    ///
    /// # Errors
    ///
    /// See [`ApiClient::handle_response`].
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.send(self.request(Method::GET, path)).await
    }

    /// GET `path` with query parameters.
    ///
    /// # Errors
    ///
    /// See [`ApiClient::handle_response`].
    pub async fn get_with_query<T, Q>(&self, path: &str, query: &Q) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        self.send(self.request(Method::GET, path).query(query)).await
    }

    /// POST a JSON body to `path`.
    ///
    /// # Errors
    ///
    /// See [`ApiClient::handle_response`].
    pub async fn post<T, B>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.send(self.request(Method::POST, path).json(body)).await
    }

    /// POST to `path` with query parameters and no body.
    ///
    /// # Errors
    ///
    /// See [`ApiClient::handle_response`].
    pub async fn post_with_query<T, Q>(&self, path: &str, query: &Q) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        self.send(self.request(Method::POST, path).query(query)).await
    }

    /// PUT a JSON body to `path`.
    ///
    /// # Errors
    ///
    /// See [`ApiClient::handle_response`].
    pub async fn put<T, B>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.send(self.request(Method::PUT, path).json(body)).await
    }

    /// DELETE `path`.
    ///
    /// # Errors
    ///
    /// See [`ApiClient::handle_response`].
    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.send(self.request(Method::DELETE, path)).await
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}{path}", self.inner.base_url);
        let builder = self.inner.client.request(method, url);

        match self.inner.session.token() {
            Some(token) => builder.bearer_auth(token.expose_secret()),
            None => builder,
        }
    }

    #[instrument(skip_all)]
    async fn send<T: DeserializeOwned>(&self, builder: RequestBuilder) -> Result<T, ApiError> {
        let response = builder.send().await?;
        self.handle_response(response).await
    }

    /// Turn a response into a parsed body or a typed error.
    ///
    /// # Errors
    ///
    /// - `ApiError::Unauthorized` on 401, after clearing the session
    /// - `ApiError::Status` on any other non-success status
    /// - `ApiError::Parse` if the body does not match `T`
    async fn handle_response<T: DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> Result<T, ApiError> {
        let status = response.status();
        let url = response.url().path().to_string();

        if status == StatusCode::UNAUTHORIZED {
            warn!(path = %url, "Backend returned 401, clearing session");
            self.inner.session.clear();
            return Err(ApiError::Unauthorized {
                login_route: LOGIN_ROUTE,
            });
        }

        let body = response.text().await?;

        if !status.is_success() {
            debug!(path = %url, status = status.as_u16(), "Backend returned error status");
            return Err(ApiError::Status {
                status: status.as_u16(),
                message: extract_error_message(&body),
            });
        }

        serde_json::from_str(&body)
            .map_err(|e| ApiError::Parse(format!("Failed to parse response from {url}: {e}")))
    }
}
