use serde::Serialize;

use scrum_master_core::{
    GenerateStandupRequest, GeneratedStandupSummary, NewStandupEntry, ReminderSent,
    SlackCollection, StandupEntryCreated, StandupSummary, TeamId,
};

use crate::{ApiClient, ApiError};

/// `/standup` endpoints.
#[derive(Debug, Clone, Copy)]
pub struct StandupsClient<'a> {
    api: &'a ApiClient,
}

#[derive(Serialize)]
struct CollectQuery<'q> {
    channel_id: &'q str,
    hours_back: u32,
}

#[derive(Serialize)]
struct ReminderQuery<'q> {
    channel_id: &'q str,
    #[serde(skip_serializing_if = "Option::is_none")]
    custom_message: Option<&'q str>,
}

impl<'a> StandupsClient<'a> {
    pub(crate) const fn new(api: &'a ApiClient) -> Self {
        Self { api }
    }

    /// Most recent `limit` summaries for a team.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn summaries(
        &self,
        team_id: TeamId,
        limit: u32,
    ) -> Result<Vec<StandupSummary>, ApiError> {
        self.api
            .get_with_query(
                &format!("/standup/teams/{team_id}/summaries"),
                &[("limit", limit)],
            )
            .await
    }

    /// Submit one member's standup entry.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn create_entry(
        &self,
        team_id: TeamId,
        entry: &NewStandupEntry,
    ) -> Result<StandupEntryCreated, ApiError> {
        self.api
            .post(&format!("/standup/teams/{team_id}/entries"), entry)
            .await
    }

    /// Generate an AI summary of the team's standup.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn generate_summary(
        &self,
        request: &GenerateStandupRequest,
    ) -> Result<GeneratedStandupSummary, ApiError> {
        self.api
            .post(
                &format!("/standup/teams/{}/generate-summary", request.team_id),
                request,
            )
            .await
    }

    /// Collect standup messages posted to a Slack channel in the last
    /// `hours_back` hours.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn collect_from_slack(
        &self,
        team_id: TeamId,
        channel_id: &str,
        hours_back: u32,
    ) -> Result<SlackCollection, ApiError> {
        self.api
            .post_with_query(
                &format!("/standup/slack/collect/{team_id}"),
                &CollectQuery {
                    channel_id,
                    hours_back,
                },
            )
            .await
    }

    /// Post a standup reminder to a Slack channel.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn send_reminder(
        &self,
        team_id: TeamId,
        channel_id: &str,
        custom_message: Option<&str>,
    ) -> Result<ReminderSent, ApiError> {
        self.api
            .post_with_query(
                &format!("/standup/slack/reminder/{team_id}"),
                &ReminderQuery {
                    channel_id,
                    custom_message,
                },
            )
            .await
    }
}
