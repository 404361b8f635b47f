//! Subcommand implementations.
//!
//! Each module owns one backend resource: its clap subcommand enum and a
//! `run` function that calls the matching resource client.

use std::io::{Read, Write};

use serde::Serialize;
use thiserror::Error;

use scrum_master_client::{ApiClient, ApiError, ClientConfig, ConfigError, Session};
use scrum_master_core::parse_standup_message;

pub mod agents;
pub mod ai;
pub mod analytics;
pub mod backlog;
pub mod jira;
pub mod sprints;
pub mod standups;
pub mod teams;

/// Environment variable holding the bearer token.
pub const TOKEN_ENV: &str = "SCRUM_API_TOKEN";

/// Errors that can occur while running a command.
#[derive(Debug, Error)]
pub enum CommandError {
    /// Client configuration is invalid.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// The backend rejected or failed the request.
    #[error("{0}")]
    Api(#[from] ApiError),

    /// Writing output or reading input failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Output could not be serialized.
    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// A command argument is invalid.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

/// Build the API client from the environment, with an optional base URL
/// override. The session is authenticated when `SCRUM_API_TOKEN` is set.
pub fn connect(api_url: Option<&str>) -> Result<ApiClient, CommandError> {
    let config = match api_url {
        Some(url) => ClientConfig::with_base_url(url)?,
        None => ClientConfig::from_env()?,
    };

    let session = std::env::var(TOKEN_ENV)
        .ok()
        .filter(|t| !t.trim().is_empty())
        .map_or_else(Session::anonymous, Session::with_token);

    if !session.is_authenticated() {
        tracing::debug!("{TOKEN_ENV} not set, sending anonymous requests");
    }

    Ok(ApiClient::new(&config, session)?)
}

/// Write `value` to stdout as pretty JSON.
pub fn print_json<T: Serialize>(value: &T) -> Result<(), CommandError> {
    let mut stdout = std::io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, value)?;
    writeln!(stdout)?;
    Ok(())
}

/// Parse a standup message given as an argument or on stdin.
pub fn parse_standup(message: Option<String>) -> Result<(), CommandError> {
    let message = match message {
        Some(message) => message,
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };

    if message.trim().is_empty() {
        return Err(CommandError::InvalidArgument(
            "standup message is empty".to_string(),
        ));
    }

    print_json(&parse_standup_message(&message))
}
