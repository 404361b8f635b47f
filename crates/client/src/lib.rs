//! AI Scrum Master API client.
//!
//! Typed access to the dashboard backend's `/api/v1` REST API.
//!
//! # Architecture
//!
//! - [`ApiClient`] wraps a `reqwest::Client` with the base URL, default
//!   headers and bearer-token injection from an explicit [`Session`].
//! - Each backend resource has a small client in [`resources`] with one
//!   method per endpoint.
//! - A 401 response clears the session and surfaces as
//!   [`ApiError::Unauthorized`]; the caller decides whether to send the user
//!   to the login route.
//!
//! # Example
//!
//! ```rust,ignore
//! use scrum_master_client::{ApiClient, ClientConfig, Session};
//! use scrum_master_core::TeamId;
//!
//! let client = ApiClient::new(&ClientConfig::from_env()?, Session::anonymous())?;
//! let sprints = client.sprints().list_for_team(TeamId::new(1)).await?;
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod error;
pub mod http;
pub mod resources;
pub mod session;

pub use config::{ClientConfig, ConfigError};
pub use error::ApiError;
pub use http::ApiClient;
pub use session::Session;
