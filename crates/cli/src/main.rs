//! AI Scrum Master CLI - Drive the dashboard backend from a terminal.
//!
//! # Usage
//!
//! ```bash
//! # List teams and their sprints
//! sm-cli teams list
//! sm-cli sprints list --team 1
//!
//! # Collect today's standup from Slack and summarise it
//! sm-cli standups collect --team 1 --channel C0123ABCD
//! sm-cli standups generate --team 1 --post-to C0123ABCD
//!
//! # Ask the assistant
//! sm-cli ai chat "Which stories are at risk this sprint?"
//!
//! # Parse a standup message locally
//! echo "Yesterday: API\nToday: tests" | sm-cli parse-standup
//! ```
//!
//! # Environment Variables
//!
//! - `SCRUM_API_URL` - Backend base URL (default `http://localhost:8000/api/v1`)
//! - `SCRUM_API_TIMEOUT_SECS` - Request timeout in seconds (default 30)
//! - `SCRUM_API_TOKEN` - Bearer token; requests are anonymous without it
//!
//! Results are written to stdout as pretty-printed JSON.

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};

mod commands;

use commands::{
    agents::AgentsAction, ai::AiAction, analytics::AnalyticsAction, backlog::BacklogAction,
    jira::JiraAction, sprints::SprintsAction, standups::StandupsAction, teams::ProjectsAction,
    teams::TeamsAction,
};

#[derive(Parser)]
#[command(name = "sm-cli")]
#[command(author, version, about = "AI Scrum Master CLI")]
struct Cli {
    /// Backend base URL, overrides `SCRUM_API_URL`
    #[arg(long, global = true)]
    api_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Teams and their members
    Teams {
        #[command(subcommand)]
        action: TeamsAction,
    },
    /// Projects
    Projects {
        #[command(subcommand)]
        action: ProjectsAction,
    },
    /// Sprints, velocity and burndown
    Sprints {
        #[command(subcommand)]
        action: SprintsAction,
    },
    /// Backlog items and AI analysis
    Backlog {
        #[command(subcommand)]
        action: BacklogAction,
    },
    /// Standup entries, summaries and Slack collection
    Standups {
        #[command(subcommand)]
        action: StandupsAction,
    },
    /// AI assistant
    Ai {
        #[command(subcommand)]
        action: AiAction,
    },
    /// Dashboard analytics
    Analytics {
        #[command(subcommand)]
        action: AnalyticsAction,
    },
    /// Multi-step agent workflows
    Agents {
        #[command(subcommand)]
        action: AgentsAction,
    },
    /// Jira sync through the backend
    Jira {
        #[command(subcommand)]
        action: JiraAction,
    },
    /// Split a standup message into sections without calling the backend
    ParseStandup {
        /// Message text; read from stdin when omitted
        message: Option<String>,
    },
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "sm_cli=info,scrum_master_client=warn".into()),
        )
        .init();

    // Load .env so SCRUM_API_* work the same as for the functions server
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    if let Commands::ParseStandup { message } = cli.command {
        commands::parse_standup(message)?;
        return Ok(());
    }

    let api = commands::connect(cli.api_url.as_deref())?;

    match cli.command {
        Commands::Teams { action } => commands::teams::run(&api, action).await?,
        Commands::Projects { action } => commands::teams::run_projects(&api, action).await?,
        Commands::Sprints { action } => commands::sprints::run(&api, action).await?,
        Commands::Backlog { action } => commands::backlog::run(&api, action).await?,
        Commands::Standups { action } => commands::standups::run(&api, action).await?,
        Commands::Ai { action } => commands::ai::run(&api, action).await?,
        Commands::Analytics { action } => commands::analytics::run(&api, action).await?,
        Commands::Agents { action } => commands::agents::run(&api, action).await?,
        Commands::Jira { action } => commands::jira::run(&api, action).await?,
        Commands::ParseStandup { .. } => {}
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parses_nested_subcommand() {
        let cli = Cli::try_parse_from(["sm-cli", "sprints", "velocity", "--team", "3"])
            .expect("parse");
        assert!(matches!(
            cli.command,
            Commands::Sprints {
                action: SprintsAction::Velocity { team: 3, count: 5 }
            }
        ));
    }

    #[test]
    fn test_schedule_standup_splits_days() {
        let cli = Cli::try_parse_from([
            "sm-cli",
            "agents",
            "schedule-standup",
            "--days",
            "monday,thursday",
        ])
        .expect("parse");
        let Commands::Agents {
            action: AgentsAction::ScheduleStandup { time, days, .. },
        } = cli.command
        else {
            panic!("expected schedule-standup");
        };
        assert_eq!(time, "09:00");
        assert_eq!(days, ["monday", "thursday"]);
    }

    #[test]
    fn test_velocity_history_rejects_out_of_range_count() {
        let result = Cli::try_parse_from([
            "sm-cli",
            "analytics",
            "velocity-history",
            "3",
            "--sprints",
            "21",
        ]);
        assert!(result.is_err());
    }
}
