//! Standup entries, AI-generated summaries and the Slack collection flow.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::types::{
    SprintId, StandupEntryId, StandupSource, StandupSummaryId, SummaryStatus, TeamId,
    TeamSentiment, UserId,
};

/// One team member's standup update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StandupEntry {
    pub id: StandupEntryId,
    pub user_id: UserId,
    pub team_id: TeamId,
    #[serde(default)]
    pub yesterday_work: Option<String>,
    #[serde(default)]
    pub today_plan: Option<String>,
    #[serde(default)]
    pub blockers: Option<String>,
    #[serde(default)]
    pub additional_notes: Option<String>,
    pub entry_date: DateTime<Utc>,
    #[serde(default)]
    pub source: StandupSource,
}

impl StandupEntry {
    #[must_use]
    pub fn has_blockers(&self) -> bool {
        is_filled(self.blockers.as_deref())
    }

    /// Both the "yesterday" and "today" sections are filled in.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        is_filled(self.yesterday_work.as_deref()) && is_filled(self.today_plan.as_deref())
    }
}

fn is_filled(field: Option<&str>) -> bool {
    field.is_some_and(|s| !s.trim().is_empty())
}

/// Payload for submitting a standup entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewStandupEntry {
    pub user_id: UserId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub yesterday_work: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub today_plan: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub blockers: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub additional_notes: Option<String>,
}

/// Acknowledgement returned after an entry is stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StandupEntryCreated {
    pub message: String,
    pub entry_id: StandupEntryId,
    pub team_id: TeamId,
}

/// A blocker called out in a summary.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockerNote {
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub owner: Option<String>,
}

/// A follow-up action produced by a summary.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionItem {
    #[serde(default)]
    pub action: String,
    #[serde(default)]
    pub assignee: Option<String>,
}

/// Stored AI-generated daily summary for a team.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StandupSummary {
    pub id: StandupSummaryId,
    pub summary_text: String,
    #[serde(default)]
    pub key_achievements: Vec<String>,
    #[serde(default)]
    pub active_blockers: Vec<BlockerNote>,
    #[serde(default)]
    pub focus_areas: Vec<String>,
    #[serde(default)]
    pub action_items: Vec<ActionItem>,
    pub summary_date: DateTime<Utc>,
    #[serde(default)]
    pub participants_count: u32,
    #[serde(default)]
    pub status: SummaryStatus,
    #[serde(default)]
    pub posted_to_slack: bool,
    #[serde(default)]
    pub sprint_id: Option<SprintId>,
}

/// Request to generate a summary for a team's standup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerateStandupRequest {
    pub team_id: TeamId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
    pub include_jira_updates: bool,
    /// Post the result to this channel once generated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slack_channel_id: Option<String>,
}

/// Result of generating a summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedStandupSummary {
    #[serde(default)]
    pub message: Option<String>,
    pub summary_id: StandupSummaryId,
    pub summary: String,
    #[serde(default)]
    pub key_achievements: Vec<String>,
    #[serde(default)]
    pub blockers: Vec<BlockerNote>,
    #[serde(default)]
    pub action_items: Vec<ActionItem>,
    #[serde(default)]
    pub team_sentiment: TeamSentiment,
    #[serde(default)]
    pub posted_to_slack: bool,
}

/// A standup update collected from a Slack channel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollectedStandup {
    pub user_name: String,
    pub user_id: String,
    #[serde(default)]
    pub yesterday_work: String,
    #[serde(default)]
    pub today_plan: String,
    #[serde(default)]
    pub blockers: String,
    #[serde(default)]
    pub additional_notes: String,
    #[serde(default)]
    pub timestamp: Option<String>,
}

/// Result of collecting standup messages from Slack.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlackCollection {
    pub message: String,
    #[serde(default)]
    pub entries: Vec<CollectedStandup>,
    pub channel_id: String,
}

/// Result of sending a standup reminder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReminderSent {
    pub message: String,
    pub slack_timestamp: String,
    pub channel_id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(yesterday: Option<&str>, today: Option<&str>, blockers: Option<&str>) -> StandupEntry {
        StandupEntry {
            id: StandupEntryId::new(1),
            user_id: UserId::new(1),
            team_id: TeamId::new(1),
            yesterday_work: yesterday.map(String::from),
            today_plan: today.map(String::from),
            blockers: blockers.map(String::from),
            additional_notes: None,
            entry_date: DateTime::<Utc>::UNIX_EPOCH,
            source: StandupSource::Manual,
        }
    }

    #[test]
    fn test_entry_completeness() {
        assert!(entry(Some("API work"), Some("Tests"), None).is_complete());
        assert!(!entry(Some("API work"), Some("   "), None).is_complete());
        assert!(!entry(None, Some("Tests"), None).is_complete());
    }

    #[test]
    fn test_entry_blockers() {
        assert!(entry(None, None, Some("Waiting on design")).has_blockers());
        assert!(!entry(None, None, Some("")).has_blockers());
        assert!(!entry(None, None, None).has_blockers());
    }

    #[test]
    fn test_summary_deserializes_backend_shape() {
        let summary: StandupSummary = serde_json::from_str(
            r#"{
                "id": 1,
                "summary_text": "Team completed payment module.",
                "key_achievements": ["Payment module completed"],
                "active_blockers": [{"description": "Waiting for UX designs", "owner": "Design team"}],
                "focus_areas": ["Cart integration"],
                "action_items": [{"action": "Follow up on UX designs", "assignee": "Scrum Master"}],
                "summary_date": "2024-03-01T09:15:00Z",
                "participants_count": 5,
                "status": "published",
                "posted_to_slack": true
            }"#,
        )
        .expect("deserialize");

        assert_eq!(summary.status, SummaryStatus::Published);
        assert_eq!(summary.active_blockers.len(), 1);
        assert_eq!(
            summary.action_items.first().map(|a| a.action.as_str()),
            Some("Follow up on UX designs")
        );
    }
}
