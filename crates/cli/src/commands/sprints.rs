//! Sprint commands.

use chrono::{NaiveDate, NaiveTime};
use clap::Subcommand;

use scrum_master_client::ApiClient;
use scrum_master_core::{NewSprint, SprintId, TeamId};

use super::{CommandError, print_json};

#[derive(Subcommand)]
pub enum SprintsAction {
    /// List a team's sprints
    List {
        #[arg(long)]
        team: i32,
    },
    /// Show one sprint
    Get {
        /// Sprint ID
        id: i32,
    },
    /// Create a sprint for a team
    Create {
        #[arg(long)]
        team: i32,
        #[arg(long)]
        name: String,
        #[arg(long, default_value = "")]
        goal: String,
        /// First day, YYYY-MM-DD
        #[arg(long)]
        start: NaiveDate,
        /// Last day, YYYY-MM-DD
        #[arg(long)]
        end: NaiveDate,
        /// Planned story points
        #[arg(long)]
        capacity: f64,
        /// Available person-days
        #[arg(long, default_value_t = 0.0)]
        days: f64,
    },
    /// Velocity over the team's recent sprints
    Velocity {
        #[arg(long)]
        team: i32,
        /// Number of sprints to include
        #[arg(long, default_value_t = 5)]
        count: u32,
    },
    /// Ideal and actual burndown for a sprint
    Burndown {
        /// Sprint ID
        id: i32,
    },
}

pub async fn run(api: &ApiClient, action: SprintsAction) -> Result<(), CommandError> {
    let sprints = api.sprints();
    match action {
        SprintsAction::List { team } => {
            print_json(&sprints.list_for_team(TeamId::new(team)).await?)
        }
        SprintsAction::Get { id } => print_json(&sprints.get(SprintId::new(id)).await?),
        SprintsAction::Create {
            team,
            name,
            goal,
            start,
            end,
            capacity,
            days,
        } => {
            if end < start {
                return Err(CommandError::InvalidArgument(
                    "sprint end date is before its start date".to_string(),
                ));
            }
            let sprint = NewSprint {
                name,
                goal,
                start_date: start.and_time(NaiveTime::MIN).and_utc(),
                end_date: end.and_time(NaiveTime::MIN).and_utc(),
                planned_capacity: capacity,
                team_capacity_days: days,
            };
            print_json(&sprints.create(TeamId::new(team), &sprint).await?)
        }
        SprintsAction::Velocity { team, count } => {
            print_json(&sprints.team_velocity(TeamId::new(team), count).await?)
        }
        SprintsAction::Burndown { id } => print_json(&sprints.burndown(SprintId::new(id)).await?),
    }
}
