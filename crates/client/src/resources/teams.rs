use scrum_master_core::{Team, TeamId};

use crate::{ApiClient, ApiError};

/// `/teams` endpoints.
#[derive(Debug, Clone, Copy)]
pub struct TeamsClient<'a> {
    api: &'a ApiClient,
}

impl<'a> TeamsClient<'a> {
    pub(crate) const fn new(api: &'a ApiClient) -> Self {
        Self { api }
    }

    /// List all teams.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn list(&self) -> Result<Vec<Team>, ApiError> {
        self.api.get("/teams/").await
    }

    /// Get a team by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn get(&self, id: TeamId) -> Result<Team, ApiError> {
        self.api.get(&format!("/teams/{id}")).await
    }
}
