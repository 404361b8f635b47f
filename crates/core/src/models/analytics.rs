//! Burndown, velocity and dashboard records.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::types::{SprintId, TeamId, VelocityTrend};

/// Remaining work at the end of a sprint day.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BurndownPoint {
    pub day: u32,
    pub remaining: f64,
}

/// Ideal and actual burndown for one sprint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BurndownData {
    pub sprint_id: SprintId,
    pub planned_capacity: f64,
    #[serde(default)]
    pub actual_velocity: f64,
    #[serde(default)]
    pub days_remaining: i64,
    #[serde(default)]
    pub ideal_burndown: Vec<BurndownPoint>,
    #[serde(default)]
    pub actual_burndown: Vec<BurndownPoint>,
}

impl BurndownData {
    /// Straight line from `planned_capacity` on day 0 to zero on day `days`.
    ///
    /// Empty when `days` is zero.
    #[must_use]
    pub fn ideal_line(planned_capacity: f64, days: u32) -> Vec<BurndownPoint> {
        if days == 0 {
            return Vec::new();
        }
        let per_day = planned_capacity / f64::from(days);
        (0..=days)
            .map(|day| BurndownPoint {
                day,
                remaining: (planned_capacity - per_day * f64::from(day)).max(0.0),
            })
            .collect()
    }

    /// Most recent actual remaining figure, if any day has been recorded.
    #[must_use]
    pub fn latest_remaining(&self) -> Option<f64> {
        self.actual_burndown.last().map(|p| p.remaining)
    }
}

/// Points and issue count completed in one sprint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SprintVelocity {
    pub name: String,
    pub points: f64,
    #[serde(default)]
    pub issues: u32,
}

/// Team velocity statistics over recent sprints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VelocityData {
    pub average_velocity: f64,
    pub max_velocity: f64,
    pub min_velocity: f64,
    pub sprint_count: u32,
    #[serde(default)]
    pub recent_sprints: Vec<SprintVelocity>,
}

/// One series of a chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartDataset {
    pub label: String,
    #[serde(default)]
    pub data: Vec<f64>,
}

/// Summary figures shown alongside a chart.
///
/// Burndown and velocity charts fill in different subsets.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChartMetrics {
    #[serde(default)]
    pub total_points: Option<f64>,
    #[serde(default)]
    pub completed_points: Option<f64>,
    #[serde(default)]
    pub completion_percentage: Option<f64>,
    #[serde(default)]
    pub days_remaining: Option<i64>,
    #[serde(default)]
    pub is_on_track: Option<bool>,
    #[serde(default)]
    pub predicted_completion: Option<String>,
    #[serde(default)]
    pub average_velocity: Option<f64>,
    #[serde(default)]
    pub sprint_count: Option<u32>,
    #[serde(default)]
    pub trend: Option<VelocityTrend>,
}

/// Chart-ready labels and series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartData {
    #[serde(default)]
    pub sprint_name: Option<String>,
    #[serde(default)]
    pub labels: Vec<String>,
    #[serde(default)]
    pub datasets: Vec<ChartDataset>,
    #[serde(default)]
    pub metrics: ChartMetrics,
}

impl ChartData {
    /// Dataset with the given label.
    #[must_use]
    pub fn dataset(&self, label: &str) -> Option<&ChartDataset> {
        self.datasets.iter().find(|d| d.label == label)
    }
}

/// `{success, data}` wrapper used by the analytics endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyticsEnvelope<T> {
    pub success: bool,
    pub data: T,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentSprintMetrics {
    pub sprint_name: String,
    pub completion_percentage: f64,
    pub days_remaining: i64,
    pub total_points: f64,
    pub completed_points: f64,
    pub is_on_track: bool,
    pub velocity: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VelocitySummary {
    pub average_velocity: f64,
    pub trend: VelocityTrend,
    pub last_sprint_velocity: f64,
}

/// Dashboard overview for a team.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardMetrics {
    pub team_name: String,
    #[serde(default)]
    pub current_sprint: Option<CurrentSprintMetrics>,
    #[serde(default)]
    pub velocity_trend: Option<VelocitySummary>,
}

/// Point-in-time metrics for one sprint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SprintMetrics {
    pub sprint_id: SprintId,
    pub sprint_name: String,
    pub team_name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub total_story_points: f64,
    pub completed_story_points: f64,
    pub remaining_story_points: f64,
    pub velocity: f64,
    pub completion_percentage: f64,
    pub days_remaining: i64,
    #[serde(default)]
    pub predicted_completion_date: Option<NaiveDate>,
    pub is_on_track: bool,
    #[serde(default)]
    pub burndown_points_count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SprintOverview {
    pub name: String,
    pub team: String,
    pub duration: String,
    /// "In Progress" or "Completed".
    pub status: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SprintReportPoints {
    pub planned: f64,
    pub completed: f64,
    pub remaining: f64,
    /// Preformatted, e.g. "62.5%".
    pub completion_rate: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SprintReportVelocity {
    pub current_sprint: f64,
    pub average_last_3_sprints: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SprintTimeline {
    pub days_remaining: i64,
    pub on_track: bool,
    #[serde(default)]
    pub predicted_completion: Option<NaiveDate>,
}

/// Sprint report with generated insights.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SprintReport {
    pub sprint_overview: SprintOverview,
    pub story_points: SprintReportPoints,
    pub velocity: SprintReportVelocity,
    pub timeline: SprintTimeline,
    #[serde(default)]
    pub insights: Vec<String>,
}

/// One finished sprint in a team's velocity history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VelocityHistoryEntry {
    pub sprint_name: String,
    pub planned_points: f64,
    pub completed_points: f64,
    #[serde(default)]
    pub spillover_points: f64,
    pub velocity: f64,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VelocityHistorySummary {
    #[serde(default)]
    pub sprints_analyzed: usize,
    #[serde(default)]
    pub average_velocity: f64,
    /// Percent of planned points completed, averaged over the sprints.
    #[serde(default)]
    pub average_completion_rate: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamVelocityHistory {
    pub team_id: TeamId,
    pub team_name: String,
    #[serde(default)]
    pub velocity_history: Vec<VelocityHistoryEntry>,
    #[serde(default)]
    pub summary: VelocityHistorySummary,
}
