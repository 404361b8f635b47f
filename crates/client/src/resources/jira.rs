use scrum_master_core::{
    AutoSyncStarted, JiraConnectionStatus, JiraProjects, JiraStatusUpdate, JiraStatusUpdated,
    JiraTicketCreated, JiraTicketRequest, SyncCompleted, SyncStarted, SyncStatus,
};

use crate::{ApiClient, ApiError};

/// `/jira` endpoints of the backend (not the Jira API itself).
#[derive(Debug, Clone, Copy)]
pub struct JiraClient<'a> {
    api: &'a ApiClient,
}

impl<'a> JiraClient<'a> {
    pub(crate) const fn new(api: &'a ApiClient) -> Self {
        Self { api }
    }

    /// Start a background import of a Jira project's backlog.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn sync_backlog(&self, project_key: &str) -> Result<SyncStarted, ApiError> {
        self.api
            .post(
                &format!("/jira/sync/backlog/{project_key}"),
                &serde_json::json!({}),
            )
            .await
    }

    /// Start a background import of a Jira project's sprints.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn sync_sprints(&self, project_key: &str) -> Result<SyncStarted, ApiError> {
        self.api
            .post(
                &format!("/jira/sync/sprints/{project_key}"),
                &serde_json::json!({}),
            )
            .await
    }

    /// Start a background import of a project's backlog and sprints.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn auto_sync(&self, project_key: &str) -> Result<AutoSyncStarted, ApiError> {
        self.api
            .post(
                &format!("/jira/sync/auto/{project_key}"),
                &serde_json::json!({}),
            )
            .await
    }

    /// Import a project's backlog and sprints and wait for the result.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn sync_now(&self, project_key: &str) -> Result<SyncCompleted, ApiError> {
        self.api
            .post(
                &format!("/jira/sync/now/{project_key}"),
                &serde_json::json!({}),
            )
            .await
    }

    /// Counts of synced items for a project.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn sync_status(&self, project_key: &str) -> Result<SyncStatus, ApiError> {
        self.api.get(&format!("/jira/sync-status/{project_key}")).await
    }

    /// Create a Jira ticket through the backend.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn create_ticket(
        &self,
        ticket: &JiraTicketRequest,
    ) -> Result<JiraTicketCreated, ApiError> {
        self.api.post("/jira/create-ticket", ticket).await
    }

    /// Transition a ticket to a new status.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn update_ticket_status(
        &self,
        ticket_key: &str,
        status: &str,
    ) -> Result<JiraStatusUpdated, ApiError> {
        self.api
            .put(
                &format!("/jira/update-ticket-status/{ticket_key}"),
                &JiraStatusUpdate {
                    status: status.to_string(),
                },
            )
            .await
    }

    /// Jira projects visible to the backend's credentials.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn projects(&self) -> Result<JiraProjects, ApiError> {
        self.api.get("/jira/projects").await
    }

    /// Check the backend's Jira connection.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn connection_test(&self) -> Result<JiraConnectionStatus, ApiError> {
        self.api.get("/jira/connection-test").await
    }
}
