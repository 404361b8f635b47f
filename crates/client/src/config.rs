//! Client configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `SCRUM_API_URL` - Backend API base URL (default: `http://localhost:8000/api/v1`)
//! - `SCRUM_API_TIMEOUT_SECS` - Request timeout in seconds (default: 30)

use std::time::Duration;

use thiserror::Error;
use url::Url;

pub const DEFAULT_API_URL: &str = "http://localhost:8000/api/v1";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Backend API client configuration.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL every resource path is appended to
    pub base_url: String,
    /// Fixed per-request timeout
    pub timeout: Duration,
    /// `User-Agent` header value
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            user_agent: default_user_agent(),
        }
    }
}

impl ClientConfig {
    /// Load configuration from environment variables.
    ///
    /// Loads `.env` first if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the URL or timeout cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();

        let base_url = get_env_or_default("SCRUM_API_URL", DEFAULT_API_URL);
        Url::parse(&base_url)
            .map_err(|e| ConfigError::InvalidEnvVar("SCRUM_API_URL".to_string(), e.to_string()))?;

        let timeout_secs = get_env_or_default("SCRUM_API_TIMEOUT_SECS", "30")
            .parse::<u64>()
            .map_err(|e| {
                ConfigError::InvalidEnvVar("SCRUM_API_TIMEOUT_SECS".to_string(), e.to_string())
            })?;

        Ok(Self {
            base_url,
            timeout: Duration::from_secs(timeout_secs),
            user_agent: default_user_agent(),
        })
    }

    /// Configuration pointing at an explicit base URL, other settings default.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if `base_url` is not a valid URL.
    pub fn with_base_url(base_url: &str) -> Result<Self, ConfigError> {
        Url::parse(base_url)
            .map_err(|e| ConfigError::InvalidEnvVar("base_url".to_string(), e.to_string()))?;
        Ok(Self {
            base_url: base_url.to_string(),
            ..Self::default()
        })
    }
}

fn default_user_agent() -> String {
    format!("scrum-master-client/{}", env!("CARGO_PKG_VERSION"))
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
