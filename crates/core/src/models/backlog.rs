//! Backlog item records, create/update payloads and list filters.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::{
    BacklogItemId, BacklogItemType, BacklogStatus, Complexity, Priority, ProjectId, SprintId,
    UserId,
};

/// A unit of planned work.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BacklogItem {
    pub id: BacklogItemId,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub acceptance_criteria: Option<String>,
    #[serde(default)]
    pub item_type: BacklogItemType,
    #[serde(default)]
    pub priority: Priority,
    #[serde(default)]
    pub status: BacklogStatus,
    #[serde(default)]
    pub story_points: Option<u32>,
    #[serde(default)]
    pub jira_key: Option<String>,

    #[serde(default)]
    pub ai_suggested_points: Option<u32>,
    /// 0.0 to 1.0
    #[serde(default)]
    pub ai_complexity_score: Option<f64>,
    /// 0.0 to 1.0
    #[serde(default)]
    pub ai_clarity_score: Option<f64>,
    /// Raw JSON string of AI recommendations, as stored by the backend.
    #[serde(default)]
    pub ai_suggestions: Option<String>,
    #[serde(default)]
    pub duplicate_candidates: Option<Vec<BacklogItemId>>,

    /// 1-100 scale.
    #[serde(default)]
    pub business_value: Option<u32>,
    #[serde(default)]
    pub effort_estimate: Option<Complexity>,

    pub project_id: ProjectId,
    #[serde(default)]
    pub sprint_id: Option<SprintId>,
    #[serde(default)]
    pub assignee_id: Option<UserId>,
    #[serde(default)]
    pub created_by_id: Option<UserId>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl BacklogItem {
    #[must_use]
    pub fn is_blocked(&self) -> bool {
        self.status == BacklogStatus::Blocked
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.status == BacklogStatus::Done
    }

    #[must_use]
    pub const fn is_in_sprint(&self) -> bool {
        self.sprint_id.is_some()
    }

    /// Business value per story point, used for prioritisation.
    ///
    /// `None` when either side is missing or zero.
    #[must_use]
    pub fn value_effort_ratio(&self) -> Option<f64> {
        match (self.business_value, self.story_points) {
            (Some(value), Some(points)) if value > 0 && points > 0 => {
                Some(f64::from(value) / f64::from(points))
            }
            _ => None,
        }
    }
}

/// Payload for creating a backlog item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewBacklogItem {
    pub title: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub acceptance_criteria: Option<String>,
    pub item_type: BacklogItemType,
    pub priority: Priority,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub story_points: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub business_value: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignee_id: Option<UserId>,
}

/// Partial update of a backlog item. Unset fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BacklogItemUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub acceptance_criteria: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_type: Option<BacklogItemType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<Priority>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<BacklogStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub story_points: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub business_value: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignee_id: Option<UserId>,
}

/// Query filters for listing a project's backlog.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BacklogFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<BacklogStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<Priority>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_type: Option<BacklogItemType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignee_id: Option<UserId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
}

/// Acknowledgement that a bulk analysis job was queued.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BulkAnalysisStarted {
    pub message: String,
    pub project_id: ProjectId,
    pub status: String,
}

/// Acknowledgement returned after an item is deleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemDeleted {
    pub message: String,
}

/// AI suggestions to apply to an item. Unset fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppliedSuggestions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub acceptance_criteria: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub story_points: Option<u32>,
}
