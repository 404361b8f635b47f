use scrum_master_core::{Project, ProjectId};

use crate::{ApiClient, ApiError};

/// `/projects` endpoints.
#[derive(Debug, Clone, Copy)]
pub struct ProjectsClient<'a> {
    api: &'a ApiClient,
}

impl<'a> ProjectsClient<'a> {
    pub(crate) const fn new(api: &'a ApiClient) -> Self {
        Self { api }
    }

    /// List all projects.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn list(&self) -> Result<Vec<Project>, ApiError> {
        self.api.get("/projects/").await
    }

    /// Get a project by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn get(&self, id: ProjectId) -> Result<Project, ApiError> {
        self.api.get(&format!("/projects/{id}")).await
    }
}
