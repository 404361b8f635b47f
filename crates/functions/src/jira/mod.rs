//! Jira Cloud REST API v3 integration.

mod client;
mod error;
mod types;

pub use client::JiraClient;
pub use error::JiraError;
pub use types::{CreatedIssue, JiraUser, NewIssue, adf_document};
