//! Records produced by the backend's LLM endpoints.

use serde::{Deserialize, Serialize};

use super::backlog::BacklogItem;
use crate::types::{BacklogItemId, BacklogItemType, Complexity, TeamId};

/// Request to analyse a single backlog item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyzeBacklogRequest {
    pub title: String,
    pub description: String,
    pub item_type: BacklogItemType,
}

/// LLM assessment of a backlog item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BacklogAnalysis {
    /// 0.0 to 1.0
    pub clarity_score: f64,
    #[serde(default)]
    pub suggested_improvements: Vec<String>,
    pub estimated_complexity: Complexity,
    #[serde(default)]
    pub potential_risks: Vec<String>,
    #[serde(default)]
    pub acceptance_criteria_suggestions: Vec<String>,
}

/// Request for a sprint plan suggestion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SprintPlanRequest {
    pub team_id: TeamId,
    pub backlog_items: Vec<BacklogItem>,
    pub team_velocity: f64,
    pub capacity_days: f64,
    #[serde(default)]
    pub sprint_goal_context: String,
}

/// LLM-recommended sprint composition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SprintPlanSuggestion {
    #[serde(default)]
    pub recommended_items: Vec<BacklogItemId>,
    pub total_story_points: u32,
    pub sprint_goal: String,
    #[serde(default)]
    pub risks: Vec<String>,
    /// Percentage of capacity used by the recommendation.
    pub capacity_utilization: f64,
}

/// A question for the assistant chat.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AiChatRequest {
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<serde_json::Value>,
}

/// Assistant chat answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AiChatReply {
    pub response: String,
    /// Topic the backend classified the question under (standup, backlog, sprint, general).
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub timestamp: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backlog_analysis_shape() {
        let analysis: BacklogAnalysis = serde_json::from_str(
            r#"{
                "clarity_score": 0.5,
                "suggested_improvements": ["Unable to analyze - please review manually"],
                "estimated_complexity": "M",
                "potential_risks": ["Analysis failed"],
                "acceptance_criteria_suggestions": []
            }"#,
        )
        .expect("deserialize");

        assert_eq!(analysis.estimated_complexity, Complexity::M);
        assert_eq!(analysis.potential_risks, vec!["Analysis failed".to_string()]);
    }

    #[test]
    fn test_sprint_plan_suggestion_shape() {
        let plan: SprintPlanSuggestion = serde_json::from_str(
            r#"{
                "recommended_items": [1, 2, 5],
                "total_story_points": 21,
                "sprint_goal": "Complete checkout flow",
                "risks": [],
                "capacity_utilization": 87.5
            }"#,
        )
        .expect("deserialize");

        assert_eq!(plan.recommended_items.len(), 3);
        assert_eq!(plan.total_story_points, 21);
    }
}
