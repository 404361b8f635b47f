//! Team and project commands.

use clap::Subcommand;

use scrum_master_client::ApiClient;
use scrum_master_core::{ProjectId, TeamId};

use super::{CommandError, print_json};

#[derive(Subcommand)]
pub enum TeamsAction {
    /// List all teams
    List,
    /// Show one team
    Get {
        /// Team ID
        id: i32,
    },
}

#[derive(Subcommand)]
pub enum ProjectsAction {
    /// List all projects
    List,
    /// Show one project
    Get {
        /// Project ID
        id: i32,
    },
}

pub async fn run(api: &ApiClient, action: TeamsAction) -> Result<(), CommandError> {
    match action {
        TeamsAction::List => print_json(&api.teams().list().await?),
        TeamsAction::Get { id } => print_json(&api.teams().get(TeamId::new(id)).await?),
    }
}

pub async fn run_projects(api: &ApiClient, action: ProjectsAction) -> Result<(), CommandError> {
    match action {
        ProjectsAction::List => print_json(&api.projects().list().await?),
        ProjectsAction::Get { id } => print_json(&api.projects().get(ProjectId::new(id)).await?),
    }
}
