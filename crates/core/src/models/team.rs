//! Scrum team records.

use serde::{Deserialize, Serialize};

use crate::types::TeamId;

/// A Scrum team and its integration settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Team {
    pub id: TeamId,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub team_size: u32,
    #[serde(default = "default_true")]
    pub is_active: bool,
    #[serde(default)]
    pub sprint_length_days: Option<u32>,
    /// Daily standup time in 24h `HH:MM` format.
    #[serde(default)]
    pub standup_time: Option<String>,
    #[serde(default)]
    pub standup_timezone: Option<String>,
    #[serde(default)]
    pub slack_channel_id: Option<String>,
    #[serde(default)]
    pub slack_channel_name: Option<String>,
    #[serde(default)]
    pub jira_project_key: Option<String>,
}

const fn default_true() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_team_minimal_payload() {
        let team: Team = serde_json::from_str(
            r##"{
                "id": 1,
                "name": "Platform",
                "description": "Core platform team",
                "team_size": 5,
                "is_active": true,
                "slack_channel_name": "#platform",
                "standup_time": "09:30"
            }"##,
        )
        .expect("deserialize");

        assert_eq!(team.id, TeamId::new(1));
        assert_eq!(team.slack_channel_name.as_deref(), Some("#platform"));
        assert!(team.jira_project_key.is_none());
    }

    #[test]
    fn test_team_is_active_defaults_true() {
        let team: Team = serde_json::from_str(r#"{"id": 2, "name": "Mobile"}"#).expect("parse");
        assert!(team.is_active);
        assert_eq!(team.team_size, 0);
    }
}
