//! Records for the backend's agent endpoints.

use serde::{Deserialize, Serialize};

/// Natural-language request for the Scrum Master agent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentRequest {
    pub request: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<serde_json::Value>,
}

/// Agent chat answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentReply {
    pub success: bool,
    pub response: String,
    #[serde(default)]
    pub agent: Option<String>,
    #[serde(default)]
    pub timestamp: Option<String>,
}

/// Multi-step workflows the agent can run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkflowKind {
    Standup,
    SprintHealth,
    CreateTicket,
}

impl WorkflowKind {
    /// Path segment under `/agents/workflow/`.
    #[must_use]
    pub const fn path_segment(&self) -> &'static str {
        match self {
            Self::Standup => "standup",
            Self::SprintHealth => "sprint-health",
            Self::CreateTicket => "create-ticket",
        }
    }
}

/// Request body for a workflow run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkflowRequest {
    pub workflow_type: WorkflowKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parameters: Option<serde_json::Map<String, serde_json::Value>>,
}

/// Outcome of a workflow run.
///
/// The common fields are typed; workflow-specific output (health report,
/// created ticket, …) is kept in `output`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkflowResult {
    pub success: bool,
    #[serde(default)]
    pub workflow: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(flatten)]
    pub output: serde_json::Map<String, serde_json::Value>,
}

/// A tool the agent can call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentTool {
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub actions: Vec<String>,
}

/// A workflow the agent advertises.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentWorkflow {
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub automated: bool,
}

/// What the agent can do.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentCapabilities {
    pub agent_type: String,
    pub model: String,
    #[serde(default)]
    pub tools: Vec<AgentTool>,
    #[serde(default)]
    pub workflows: Vec<AgentWorkflow>,
    #[serde(default)]
    pub features: Vec<String>,
}

/// Acknowledgement of a triggered standup collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AutoStandup {
    pub success: bool,
    pub channel: String,
    pub message: String,
    /// "scheduled" when queued in the background, "completed" otherwise.
    pub status: String,
}

const WEEKDAYS: [&str; 5] = ["monday", "tuesday", "wednesday", "thursday", "friday"];

/// Recurring standup schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StandupSchedule {
    pub channel: String,
    /// Local time of day, `HH:MM`.
    pub time: String,
    pub timezone: String,
    /// Lowercase weekday names.
    pub days: Vec<String>,
}

impl Default for StandupSchedule {
    fn default() -> Self {
        Self {
            channel: "#standup".to_string(),
            time: "09:00".to_string(),
            timezone: "UTC".to_string(),
            days: WEEKDAYS.iter().map(ToString::to_string).collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduledStandup {
    pub success: bool,
    pub message: String,
    pub config: StandupSchedule,
    #[serde(default)]
    pub note: Option<String>,
}
