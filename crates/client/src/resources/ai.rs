use scrum_master_core::{
    AiChatReply, AiChatRequest, AnalyzeBacklogRequest, BacklogAnalysis, SprintPlanRequest,
    SprintPlanSuggestion,
};

use crate::{ApiClient, ApiError};

/// `/ai` endpoints. Each call is a single LLM round trip on the backend.
#[derive(Debug, Clone, Copy)]
pub struct AiClient<'a> {
    api: &'a ApiClient,
}

impl<'a> AiClient<'a> {
    pub(crate) const fn new(api: &'a ApiClient) -> Self {
        Self { api }
    }

    /// Assess clarity, complexity and risks of a backlog item.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn analyze_backlog(
        &self,
        request: &AnalyzeBacklogRequest,
    ) -> Result<BacklogAnalysis, ApiError> {
        self.api.post("/ai/analyze-backlog", request).await
    }

    /// Suggest which backlog items fit the next sprint.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn suggest_sprint_plan(
        &self,
        request: &SprintPlanRequest,
    ) -> Result<SprintPlanSuggestion, ApiError> {
        self.api.post("/ai/suggest-sprint-plan", request).await
    }

    /// Ask the assistant a question.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn chat(&self, request: &AiChatRequest) -> Result<AiChatReply, ApiError> {
        self.api.post("/ai/chat", request).await
    }
}
