use scrum_master_core::{
    BurndownData, NewSprint, Sprint, SprintFromPlan, SprintId, TeamId, VelocityData,
};

use crate::{ApiClient, ApiError};

/// `/sprints` endpoints.
#[derive(Debug, Clone, Copy)]
pub struct SprintsClient<'a> {
    api: &'a ApiClient,
}

impl<'a> SprintsClient<'a> {
    pub(crate) const fn new(api: &'a ApiClient) -> Self {
        Self { api }
    }

    /// List a team's sprints, most recent first.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn list_for_team(&self, team_id: TeamId) -> Result<Vec<Sprint>, ApiError> {
        self.api
            .get(&format!("/sprints/teams/{team_id}/sprints"))
            .await
    }

    /// Get a sprint by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn get(&self, id: SprintId) -> Result<Sprint, ApiError> {
        self.api.get(&format!("/sprints/{id}")).await
    }

    /// Create a sprint for a team.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn create(&self, team_id: TeamId, sprint: &NewSprint) -> Result<Sprint, ApiError> {
        self.api
            .post(&format!("/sprints/teams/{team_id}/sprints"), sprint)
            .await
    }

    /// Create a sprint from an accepted planning suggestion.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn create_from_plan(
        &self,
        team_id: TeamId,
        plan: &SprintFromPlan,
    ) -> Result<Sprint, ApiError> {
        self.api
            .post(&format!("/sprints/teams/{team_id}/create-from-plan"), plan)
            .await
    }

    /// Velocity statistics over the team's last `sprint_count` sprints.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn team_velocity(
        &self,
        team_id: TeamId,
        sprint_count: u32,
    ) -> Result<VelocityData, ApiError> {
        self.api
            .get_with_query(
                &format!("/sprints/teams/{team_id}/velocity"),
                &[("sprint_count", sprint_count)],
            )
            .await
    }

    /// Ideal and actual burndown for a sprint.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn burndown(&self, id: SprintId) -> Result<BurndownData, ApiError> {
        self.api.get(&format!("/sprints/{id}/burndown")).await
    }
}
