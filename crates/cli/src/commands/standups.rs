//! Standup commands.

use chrono::NaiveDate;
use clap::Subcommand;

use scrum_master_client::ApiClient;
use scrum_master_core::{GenerateStandupRequest, NewStandupEntry, TeamId, UserId};

use super::{CommandError, print_json};

#[derive(Subcommand)]
pub enum StandupsAction {
    /// Most recent summaries for a team
    Summaries {
        #[arg(long)]
        team: i32,
        #[arg(long, default_value_t = 10)]
        limit: u32,
    },
    /// Submit a standup entry
    Submit {
        #[arg(long)]
        team: i32,
        #[arg(long)]
        user: i32,
        #[arg(long)]
        yesterday: Option<String>,
        #[arg(long)]
        today: Option<String>,
        #[arg(long)]
        blockers: Option<String>,
        #[arg(long)]
        notes: Option<String>,
    },
    /// Generate an AI summary of a team's standup
    Generate {
        #[arg(long)]
        team: i32,
        /// Day to summarise, YYYY-MM-DD; today when omitted
        #[arg(long)]
        date: Option<NaiveDate>,
        /// Include Jira updates in the summary
        #[arg(long)]
        jira: bool,
        /// Slack channel ID to post the summary to
        #[arg(long)]
        post_to: Option<String>,
    },
    /// Collect standup messages from a Slack channel
    Collect {
        #[arg(long)]
        team: i32,
        /// Slack channel ID
        #[arg(long)]
        channel: String,
        #[arg(long, default_value_t = 24)]
        hours: u32,
    },
    /// Post a standup reminder to a Slack channel
    Remind {
        #[arg(long)]
        team: i32,
        /// Slack channel ID
        #[arg(long)]
        channel: String,
        /// Replace the default reminder text
        #[arg(long)]
        message: Option<String>,
    },
}

pub async fn run(api: &ApiClient, action: StandupsAction) -> Result<(), CommandError> {
    let standups = api.standups();
    match action {
        StandupsAction::Summaries { team, limit } => {
            print_json(&standups.summaries(TeamId::new(team), limit).await?)
        }
        StandupsAction::Submit {
            team,
            user,
            yesterday,
            today,
            blockers,
            notes,
        } => {
            let entry = NewStandupEntry {
                user_id: UserId::new(user),
                yesterday_work: yesterday,
                today_plan: today,
                blockers,
                additional_notes: notes,
            };
            print_json(&standups.create_entry(TeamId::new(team), &entry).await?)
        }
        StandupsAction::Generate {
            team,
            date,
            jira,
            post_to,
        } => {
            let request = GenerateStandupRequest {
                team_id: TeamId::new(team),
                date,
                include_jira_updates: jira,
                slack_channel_id: post_to,
            };
            print_json(&standups.generate_summary(&request).await?)
        }
        StandupsAction::Collect {
            team,
            channel,
            hours,
        } => print_json(
            &standups
                .collect_from_slack(TeamId::new(team), &channel, hours)
                .await?,
        ),
        StandupsAction::Remind {
            team,
            channel,
            message,
        } => print_json(
            &standups
                .send_reminder(TeamId::new(team), &channel, message.as_deref())
                .await?,
        ),
    }
}
