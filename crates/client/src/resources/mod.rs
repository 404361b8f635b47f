//! One client per backend resource, one method per endpoint.
//!
//! Resource clients borrow the [`ApiClient`](crate::ApiClient) they were
//! created from; obtain them with `client.teams()`, `client.sprints()`, ...

mod agents;
mod ai;
mod analytics;
mod backlog;
mod jira;
mod projects;
mod sprints;
mod standups;
mod teams;

pub use agents::AgentsClient;
pub use ai::AiClient;
pub use analytics::AnalyticsClient;
pub use backlog::BacklogClient;
pub use jira::JiraClient;
pub use projects::ProjectsClient;
pub use sprints::SprintsClient;
pub use standups::StandupsClient;
pub use teams::TeamsClient;
