//! Backlog commands.

use clap::Subcommand;

use scrum_master_client::ApiClient;
use scrum_master_core::{
    BacklogFilter, BacklogItemId, BacklogItemType, BacklogItemUpdate, BacklogStatus,
    NewBacklogItem, Priority, ProjectId,
};

use super::{CommandError, print_json};

#[derive(Subcommand)]
pub enum BacklogAction {
    /// List a project's backlog
    List {
        #[arg(long)]
        project: i32,
        #[arg(long)]
        status: Option<BacklogStatus>,
        #[arg(long)]
        priority: Option<Priority>,
        #[arg(long = "type")]
        item_type: Option<BacklogItemType>,
        /// Free-text search in title and description
        #[arg(long)]
        search: Option<String>,
    },
    /// Show one item
    Get {
        /// Item ID
        id: i32,
    },
    /// Add an item to a project's backlog
    Create {
        #[arg(long)]
        project: i32,
        #[arg(long)]
        title: String,
        #[arg(long, default_value = "")]
        description: String,
        #[arg(long = "type", default_value = "story")]
        item_type: BacklogItemType,
        #[arg(long, default_value = "medium")]
        priority: Priority,
        #[arg(long)]
        points: Option<u32>,
    },
    /// Move an item to a new status
    SetStatus {
        /// Item ID
        id: i32,
        status: BacklogStatus,
    },
    /// Delete an item
    Delete {
        /// Item ID
        id: i32,
    },
    /// Queue AI analysis of every item in a project
    Analyze {
        #[arg(long)]
        project: i32,
    },
}

pub async fn run(api: &ApiClient, action: BacklogAction) -> Result<(), CommandError> {
    let backlog = api.backlog();
    match action {
        BacklogAction::List {
            project,
            status,
            priority,
            item_type,
            search,
        } => {
            let filter = BacklogFilter {
                status,
                priority,
                item_type,
                search,
                ..Default::default()
            };
            print_json(&backlog.list(ProjectId::new(project), &filter).await?)
        }
        BacklogAction::Get { id } => print_json(&backlog.get(BacklogItemId::new(id)).await?),
        BacklogAction::Create {
            project,
            title,
            description,
            item_type,
            priority,
            points,
        } => {
            let item = NewBacklogItem {
                title,
                description,
                acceptance_criteria: None,
                item_type,
                priority,
                story_points: points,
                business_value: None,
                assignee_id: None,
            };
            print_json(&backlog.create(ProjectId::new(project), &item).await?)
        }
        BacklogAction::SetStatus { id, status } => {
            let update = BacklogItemUpdate {
                status: Some(status),
                ..Default::default()
            };
            print_json(&backlog.update(BacklogItemId::new(id), &update).await?)
        }
        BacklogAction::Delete { id } => print_json(&backlog.delete(BacklogItemId::new(id)).await?),
        BacklogAction::Analyze { project } => {
            print_json(&backlog.bulk_analyze(ProjectId::new(project)).await?)
        }
    }
}
