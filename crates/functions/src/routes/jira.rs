//! Jira functions.

use axum::{Json, extract::State, extract::rejection::JsonRejection};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

use super::{FunctionResult, ok, parse_body, required};
use crate::error::FunctionError;
use crate::jira::{JiraUser, NewIssue};
use crate::state::AppState;

/// Issue type used when the request does not name one.
pub const DEFAULT_ISSUE_TYPE: &str = "Task";

/// Check the Jira credentials against `/myself`.
#[instrument(skip(state))]
pub async fn auth_check(State(state): State<AppState>) -> FunctionResult<JiraUser> {
    let jira = state.jira()?;
    let user = jira.myself().await?;
    Ok(ok(user))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateIssueBody {
    #[serde(default)]
    pub project_key: Option<String>,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub issue_type: Option<String>,
    #[serde(default)]
    pub priority: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct IssueCreated {
    pub key: String,
    pub id: String,
    /// Browser URL of the new issue.
    pub url: String,
}

/// Create an issue, falling back to `JIRA_PROJECT_KEY` for the project.
#[instrument(skip(state, payload))]
pub async fn create_issue(
    State(state): State<AppState>,
    payload: Result<Json<CreateIssueBody>, JsonRejection>,
) -> FunctionResult<IssueCreated> {
    let jira = state.jira()?;
    let body = parse_body(payload)?;

    let summary = required(body.summary, "summary")?;
    let project_key = non_blank(body.project_key)
        .or_else(|| state.config().jira.default_project_key.clone())
        .ok_or_else(|| {
            FunctionError::BadRequest(
                "projectKey is required when JIRA_PROJECT_KEY is not set".to_string(),
            )
        })?;

    let issue = NewIssue {
        project_key,
        summary,
        description: body.description,
        issue_type: non_blank(body.issue_type).unwrap_or_else(|| DEFAULT_ISSUE_TYPE.to_string()),
        priority: non_blank(body.priority),
    };

    let created = jira.create_issue(&issue).await?;
    info!(key = %created.key, project = %issue.project_key, "Jira issue created");

    Ok(ok(IssueCreated {
        url: jira.browse_url(&created.key),
        key: created.key,
        id: created.id,
    }))
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
