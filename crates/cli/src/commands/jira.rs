//! Jira commands. These go through the backend, not the integration functions.

use clap::Subcommand;

use scrum_master_client::ApiClient;
use scrum_master_core::JiraTicketRequest;

use super::{CommandError, print_json};

#[derive(Subcommand)]
pub enum JiraAction {
    /// Check the backend's Jira connection
    Test,
    /// List Jira projects
    Projects,
    /// Pull a Jira project's backlog into the dashboard
    SyncBacklog {
        project_key: String,
    },
    /// Pull a Jira project's sprints into the dashboard
    SyncSprints {
        project_key: String,
    },
    /// Pull a project's backlog and sprints in the background
    AutoSync {
        project_key: String,
    },
    /// Pull a project's backlog and sprints and wait for the result
    SyncNow {
        project_key: String,
    },
    /// Show how much of a project has been synced
    SyncStatus {
        project_key: String,
    },
    /// Create a ticket
    Create {
        #[arg(long)]
        title: String,
        #[arg(long, default_value = "")]
        description: String,
        /// Story, Task, Bug or Epic
        #[arg(long = "type")]
        issue_type: Option<String>,
        /// High, Medium or Low
        #[arg(long)]
        priority: Option<String>,
        #[arg(long)]
        points: Option<u32>,
        /// Uses the backend's default project when omitted
        #[arg(long)]
        project: Option<String>,
    },
    /// Transition a ticket to a new status
    SetStatus {
        ticket_key: String,
        status: String,
    },
}

pub async fn run(api: &ApiClient, action: JiraAction) -> Result<(), CommandError> {
    let jira = api.jira();
    match action {
        JiraAction::Test => print_json(&jira.connection_test().await?),
        JiraAction::Projects => print_json(&jira.projects().await?),
        JiraAction::SyncBacklog { project_key } => {
            print_json(&jira.sync_backlog(&project_key).await?)
        }
        JiraAction::SyncSprints { project_key } => {
            print_json(&jira.sync_sprints(&project_key).await?)
        }
        JiraAction::AutoSync { project_key } => print_json(&jira.auto_sync(&project_key).await?),
        JiraAction::SyncNow { project_key } => print_json(&jira.sync_now(&project_key).await?),
        JiraAction::SyncStatus { project_key } => {
            print_json(&jira.sync_status(&project_key).await?)
        }
        JiraAction::Create {
            title,
            description,
            issue_type,
            priority,
            points,
            project,
        } => {
            let ticket = JiraTicketRequest {
                title,
                description,
                issue_type,
                priority,
                story_points: points,
                project_key: project,
            };
            print_json(&jira.create_ticket(&ticket).await?)
        }
        JiraAction::SetStatus { ticket_key, status } => {
            print_json(&jira.update_ticket_status(&ticket_key, &status).await?)
        }
    }
}
