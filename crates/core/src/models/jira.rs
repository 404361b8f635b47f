//! Records for the backend's Jira sync endpoints.

use serde::{Deserialize, Serialize};

/// Ticket to create in Jira through the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JiraTicketRequest {
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// Story, Task, Bug or Epic.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issue_type: Option<String>,
    /// High, Medium or Low.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub story_points: Option<u32>,
    /// Falls back to the backend's default project when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_key: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JiraTicketCreated {
    pub success: bool,
    pub ticket_key: String,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub jira_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JiraStatusUpdate {
    pub status: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JiraStatusUpdated {
    pub success: bool,
    pub ticket_key: String,
    pub new_status: String,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JiraProjectSummary {
    pub key: String,
    pub name: String,
    pub id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JiraProjects {
    pub success: bool,
    #[serde(default)]
    pub projects: Vec<JiraProjectSummary>,
    #[serde(default)]
    pub count: usize,
}

/// Acknowledgement that a background sync was started.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyncStarted {
    pub success: bool,
    pub message: String,
    pub project_key: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JiraConnectionStatus {
    pub success: bool,
    pub connected: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub jira_url: Option<String>,
    #[serde(default)]
    pub project_key: Option<String>,
}

/// Acknowledgement that a full project sync was started.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AutoSyncStarted {
    pub success: bool,
    pub message: String,
    pub project_key: String,
    /// Data sets the sync covers, e.g. `backlog_items` and `sprints`.
    #[serde(default)]
    pub sync_includes: Vec<String>,
}

/// Result of a synchronous project sync. The backend passes the sync
/// summary through as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SyncCompleted {
    pub success: bool,
    #[serde(default)]
    pub data: serde_json::Value,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SyncCounts {
    pub backlog_items_synced: u64,
    pub sprints_synced: u64,
    /// Latest sync log entry, or a "No recent sync found" note.
    #[serde(default)]
    pub last_sync_info: serde_json::Value,
}

/// How much of a project has been pulled from Jira.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SyncStatus {
    pub success: bool,
    pub project_key: String,
    pub project_name: String,
    pub sync_status: SyncCounts,
    #[serde(default)]
    pub jira_connection: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ticket_request_omits_unset_fields() {
        let request = JiraTicketRequest {
            title: "Add rate limiting".to_string(),
            description: String::new(),
            issue_type: Some("Task".to_string()),
            priority: None,
            story_points: None,
            project_key: None,
        };
        let json = serde_json::to_value(&request).expect("serialize");
        assert_eq!(
            json,
            serde_json::json!({"title": "Add rate limiting", "description": "", "issue_type": "Task"})
        );
    }

    #[test]
    fn test_connection_status_unconfigured() {
        let status: JiraConnectionStatus = serde_json::from_str(
            r#"{
                "success": false,
                "connected": false,
                "message": "Jira client not initialized. Check your configuration.",
                "config_status": {"jira_url": false}
            }"#,
        )
        .expect("deserialize");
        assert!(!status.connected);
        assert!(status.jira_url.is_none());
    }

    #[test]
    fn test_sync_status_keeps_log_entry() {
        let status: SyncStatus = serde_json::from_str(
            r#"{
                "success": true,
                "project_key": "SCRUM",
                "project_name": "Scrum Platform",
                "sync_status": {
                    "backlog_items_synced": 42,
                    "sprints_synced": 3,
                    "last_sync_info": "No recent sync found"
                },
                "jira_connection": false
            }"#,
        )
        .expect("deserialize");
        assert_eq!(status.sync_status.backlog_items_synced, 42);
        assert_eq!(status.sync_status.last_sync_info, "No recent sync found");
    }
}
