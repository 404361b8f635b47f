//! Sprint records and derived progress figures.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::{BacklogItemId, ProjectId, SprintId, SprintStatus, TeamId};

/// A fixed-length iteration with planned and actual capacity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sprint {
    pub id: SprintId,
    pub name: String,
    #[serde(default)]
    pub goal: Option<String>,
    #[serde(default)]
    pub status: SprintStatus,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    /// Story points planned for the sprint.
    #[serde(default)]
    pub planned_capacity: f64,
    /// Story points completed so far.
    #[serde(default)]
    pub actual_velocity: f64,
    /// Available person-days.
    #[serde(default)]
    pub team_capacity_days: f64,
    pub project_id: ProjectId,
    pub team_id: TeamId,
}

impl Sprint {
    /// Length of the sprint in whole days.
    #[must_use]
    pub fn duration_days(&self) -> i64 {
        (self.end_date - self.start_date).num_days()
    }

    /// Completed share of planned capacity, in percent.
    ///
    /// Zero when nothing was planned, never above 100.
    #[must_use]
    pub fn progress_percentage(&self) -> f64 {
        if self.planned_capacity <= 0.0 {
            return 0.0;
        }
        (self.actual_velocity / self.planned_capacity * 100.0).min(100.0)
    }
}

/// Payload for creating a sprint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewSprint {
    pub name: String,
    pub goal: String,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub planned_capacity: f64,
    pub team_capacity_days: f64,
}

/// Payload for creating a sprint from an AI planning suggestion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SprintFromPlan {
    pub sprint: NewSprint,
    #[serde(default)]
    pub selected_items: Vec<BacklogItemId>,
}
