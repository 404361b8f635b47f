//! Agent workflow commands.

use clap::{Subcommand, ValueEnum};

use scrum_master_client::ApiClient;
use scrum_master_core::{AgentRequest, StandupSchedule, WorkflowKind};

use super::{CommandError, print_json};

/// Workflows the backend's agents can run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Workflow {
    Standup,
    SprintHealth,
    CreateTicket,
}

impl From<Workflow> for WorkflowKind {
    fn from(workflow: Workflow) -> Self {
        match workflow {
            Workflow::Standup => Self::Standup,
            Workflow::SprintHealth => Self::SprintHealth,
            Workflow::CreateTicket => Self::CreateTicket,
        }
    }
}

#[derive(Subcommand)]
pub enum AgentsAction {
    /// Send a request to the agent router
    Chat {
        request: String,
    },
    /// Run a predefined workflow
    Run {
        #[arg(value_enum)]
        workflow: Workflow,
    },
    /// List agent tools and workflows
    Capabilities,
    /// Collect and summarize a standup now
    AutoStandup {
        #[arg(long, default_value = "#standup")]
        channel: String,
    },
    /// Register a recurring standup
    ScheduleStandup {
        #[arg(long, default_value = "#standup")]
        channel: String,
        /// Time of day, HH:MM
        #[arg(long, default_value = "09:00")]
        time: String,
        #[arg(long, default_value = "UTC")]
        timezone: String,
        /// Weekdays, comma separated; defaults to Monday through Friday
        #[arg(long, value_delimiter = ',')]
        days: Vec<String>,
    },
}

pub async fn run(api: &ApiClient, action: AgentsAction) -> Result<(), CommandError> {
    let agents = api.agents();
    match action {
        AgentsAction::Chat { request } => {
            let request = AgentRequest {
                request,
                context: None,
            };
            print_json(&agents.chat(&request).await?)
        }
        AgentsAction::Run { workflow } => print_json(&agents.run(workflow.into()).await?),
        AgentsAction::Capabilities => print_json(&agents.capabilities().await?),
        AgentsAction::AutoStandup { channel } => print_json(&agents.auto_standup(&channel).await?),
        AgentsAction::ScheduleStandup {
            channel,
            time,
            timezone,
            days,
        } => {
            let mut schedule = StandupSchedule {
                channel,
                time,
                timezone,
                ..StandupSchedule::default()
            };
            if !days.is_empty() {
                schedule.days = days.into_iter().map(|d| d.to_lowercase()).collect();
            }
            print_json(&agents.schedule_standup(&schedule).await?)
        }
    }
}
