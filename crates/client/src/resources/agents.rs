use serde::Deserialize;

use scrum_master_core::{
    AgentCapabilities, AgentReply, AgentRequest, AutoStandup, ScheduledStandup, StandupSchedule,
    WorkflowKind, WorkflowRequest, WorkflowResult,
};

use crate::{ApiClient, ApiError};

/// `/agents` endpoints.
#[derive(Debug, Clone, Copy)]
pub struct AgentsClient<'a> {
    api: &'a ApiClient,
}

#[derive(Deserialize)]
struct CapabilitiesEnvelope {
    capabilities: AgentCapabilities,
}

impl<'a> AgentsClient<'a> {
    pub(crate) const fn new(api: &'a ApiClient) -> Self {
        Self { api }
    }

    /// Send a natural-language request to the agent.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn chat(&self, request: &AgentRequest) -> Result<AgentReply, ApiError> {
        self.api.post("/agents/chat", request).await
    }

    /// Run one of the agent's multi-step workflows.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn run_workflow(
        &self,
        request: &WorkflowRequest,
    ) -> Result<WorkflowResult, ApiError> {
        let path = format!("/agents/workflow/{}", request.workflow_type.path_segment());
        self.api.post(&path, request).await
    }

    /// Convenience for [`run_workflow`](Self::run_workflow) without parameters.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn run(&self, kind: WorkflowKind) -> Result<WorkflowResult, ApiError> {
        self.run_workflow(&WorkflowRequest {
            workflow_type: kind,
            parameters: None,
        })
        .await
    }

    /// Start standup collection and summary in `channel`.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn auto_standup(&self, channel: &str) -> Result<AutoStandup, ApiError> {
        self.api
            .post_with_query("/agents/auto-standup", &[("channel", channel)])
            .await
    }

    /// Register a recurring standup.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn schedule_standup(
        &self,
        schedule: &StandupSchedule,
    ) -> Result<ScheduledStandup, ApiError> {
        self.api.post("/agents/schedule-standup", schedule).await
    }

    /// Tools and workflows the agent offers.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn capabilities(&self) -> Result<AgentCapabilities, ApiError> {
        let envelope: CapabilitiesEnvelope = self.api.get("/agents/capabilities").await?;
        Ok(envelope.capabilities)
    }
}
