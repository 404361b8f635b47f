//! Analytics commands.

use clap::Subcommand;

use scrum_master_client::ApiClient;
use scrum_master_core::{SprintId, TeamId};

use super::{CommandError, print_json};

#[derive(Subcommand)]
pub enum AnalyticsAction {
    /// Chart data for a sprint's burndown
    Burndown {
        /// Sprint ID
        sprint: i32,
    },
    /// Chart data for a team's velocity
    Velocity {
        /// Team ID
        team: i32,
        #[arg(long, default_value_t = 6)]
        sprints: u32,
    },
    /// Dashboard overview for a team
    Dashboard {
        /// Team ID
        team: i32,
    },
    /// Completion and timeline figures for a sprint
    SprintMetrics {
        /// Sprint ID
        sprint: i32,
    },
    /// Sprint report with insights
    SprintReport {
        /// Sprint ID
        sprint: i32,
    },
    /// Raw velocity history for a team
    VelocityHistory {
        /// Team ID
        team: i32,
        #[arg(long, default_value_t = 5, value_parser = clap::value_parser!(u32).range(1..=20))]
        sprints: u32,
    },
}

pub async fn run(api: &ApiClient, action: AnalyticsAction) -> Result<(), CommandError> {
    let analytics = api.analytics();
    match action {
        AnalyticsAction::Burndown { sprint } => {
            print_json(&analytics.burndown_chart(SprintId::new(sprint)).await?)
        }
        AnalyticsAction::Velocity { team, sprints } => {
            print_json(&analytics.velocity_chart(TeamId::new(team), sprints).await?)
        }
        AnalyticsAction::Dashboard { team } => {
            print_json(&analytics.dashboard_metrics(TeamId::new(team)).await?)
        }
        AnalyticsAction::SprintMetrics { sprint } => {
            print_json(&analytics.sprint_metrics(SprintId::new(sprint)).await?)
        }
        AnalyticsAction::SprintReport { sprint } => {
            print_json(&analytics.sprint_report(SprintId::new(sprint)).await?)
        }
        AnalyticsAction::VelocityHistory { team, sprints } => print_json(
            &analytics
                .team_velocity_history(TeamId::new(team), sprints)
                .await?,
        ),
    }
}
