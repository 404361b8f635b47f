use scrum_master_core::{
    AppliedSuggestions, BacklogFilter, BacklogItem, BacklogItemId, BacklogItemUpdate,
    BulkAnalysisStarted, ItemDeleted, NewBacklogItem, ProjectId,
};

use crate::{ApiClient, ApiError};

/// `/backlog` endpoints.
#[derive(Debug, Clone, Copy)]
pub struct BacklogClient<'a> {
    api: &'a ApiClient,
}

impl<'a> BacklogClient<'a> {
    pub(crate) const fn new(api: &'a ApiClient) -> Self {
        Self { api }
    }

    /// List a project's backlog. Unset filter fields are not sent.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn list(
        &self,
        project_id: ProjectId,
        filter: &BacklogFilter,
    ) -> Result<Vec<BacklogItem>, ApiError> {
        self.api
            .get_with_query(&format!("/backlog/projects/{project_id}/items"), filter)
            .await
    }

    /// Get a backlog item by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn get(&self, id: BacklogItemId) -> Result<BacklogItem, ApiError> {
        self.api.get(&format!("/backlog/items/{id}")).await
    }

    /// Add an item to a project's backlog.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn create(
        &self,
        project_id: ProjectId,
        item: &NewBacklogItem,
    ) -> Result<BacklogItem, ApiError> {
        self.api
            .post(&format!("/backlog/projects/{project_id}/items"), item)
            .await
    }

    /// Update the set fields of an item.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn update(
        &self,
        id: BacklogItemId,
        update: &BacklogItemUpdate,
    ) -> Result<BacklogItem, ApiError> {
        self.api.put(&format!("/backlog/items/{id}"), update).await
    }

    /// Delete an item.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn delete(&self, id: BacklogItemId) -> Result<ItemDeleted, ApiError> {
        self.api.delete(&format!("/backlog/items/{id}")).await
    }

    /// Queue AI analysis of every item in a project.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn bulk_analyze(
        &self,
        project_id: ProjectId,
    ) -> Result<BulkAnalysisStarted, ApiError> {
        self.api
            .post(
                &format!("/backlog/projects/{project_id}/bulk-analyze"),
                &serde_json::json!({}),
            )
            .await
    }

    /// Apply accepted AI suggestions to an item.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn apply_suggestions(
        &self,
        id: BacklogItemId,
        suggestions: &AppliedSuggestions,
    ) -> Result<BacklogItem, ApiError> {
        self.api
            .post(&format!("/backlog/items/{id}/apply-suggestions"), suggestions)
            .await
    }
}
