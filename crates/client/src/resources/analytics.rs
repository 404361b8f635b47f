use scrum_master_core::{
    AnalyticsEnvelope, ChartData, DashboardMetrics, SprintId, SprintMetrics, SprintReport, TeamId,
    TeamVelocityHistory,
};

use crate::{ApiClient, ApiError};

/// `/analytics` endpoints.
///
/// The backend wraps these in `{success, data}`; the methods return `data`.
#[derive(Debug, Clone, Copy)]
pub struct AnalyticsClient<'a> {
    api: &'a ApiClient,
}

impl<'a> AnalyticsClient<'a> {
    pub(crate) const fn new(api: &'a ApiClient) -> Self {
        Self { api }
    }

    /// Chart-ready burndown for a sprint.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn burndown_chart(&self, sprint_id: SprintId) -> Result<ChartData, ApiError> {
        let envelope: AnalyticsEnvelope<ChartData> = self
            .api
            .get(&format!("/analytics/burndown/{sprint_id}"))
            .await?;
        Ok(envelope.data)
    }

    /// Chart-ready planned vs. completed points over the last `num_sprints`.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn velocity_chart(
        &self,
        team_id: TeamId,
        num_sprints: u32,
    ) -> Result<ChartData, ApiError> {
        let envelope: AnalyticsEnvelope<ChartData> = self
            .api
            .get_with_query(
                &format!("/analytics/velocity/{team_id}"),
                &[("num_sprints", num_sprints)],
            )
            .await?;
        Ok(envelope.data)
    }

    /// Dashboard overview for a team.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn dashboard_metrics(&self, team_id: TeamId) -> Result<DashboardMetrics, ApiError> {
        let envelope: AnalyticsEnvelope<DashboardMetrics> = self
            .api
            .get(&format!("/analytics/dashboard-metrics/{team_id}"))
            .await?;
        Ok(envelope.data)
    }

    /// Completion, velocity and timeline figures for a sprint.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn sprint_metrics(&self, sprint_id: SprintId) -> Result<SprintMetrics, ApiError> {
        let envelope: AnalyticsEnvelope<SprintMetrics> = self
            .api
            .get(&format!("/analytics/sprint-metrics/{sprint_id}"))
            .await?;
        Ok(envelope.data)
    }

    /// Sprint report with insights.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn sprint_report(&self, sprint_id: SprintId) -> Result<SprintReport, ApiError> {
        let envelope: AnalyticsEnvelope<SprintReport> = self
            .api
            .get(&format!("/analytics/sprint-report/{sprint_id}"))
            .await?;
        Ok(envelope.data)
    }

    /// Raw velocity history over the last `num_sprints` (the backend
    /// accepts 1 to 20).
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn team_velocity_history(
        &self,
        team_id: TeamId,
        num_sprints: u32,
    ) -> Result<TeamVelocityHistory, ApiError> {
        let envelope: AnalyticsEnvelope<TeamVelocityHistory> = self
            .api
            .get_with_query(
                &format!("/analytics/team-velocity-history/{team_id}"),
                &[("num_sprints", num_sprints)],
            )
            .await?;
        Ok(envelope.data)
    }
}
