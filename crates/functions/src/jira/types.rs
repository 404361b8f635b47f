//! Jira REST API v3 request and response shapes.

use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

/// The authenticated user (`GET /rest/api/3/myself`).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JiraUser {
    pub account_id: String,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub email_address: Option<String>,
    #[serde(default)]
    pub active: Option<bool>,
}

/// Issue to create.
#[derive(Debug, Clone)]
pub struct NewIssue {
    pub project_key: String,
    pub summary: String,
    pub description: Option<String>,
    pub issue_type: String,
    pub priority: Option<String>,
}

impl NewIssue {
    /// `POST /rest/api/3/issue` body.
    #[must_use]
    pub fn to_request_body(&self) -> Value {
        let mut fields = json!({
            "project": { "key": self.project_key },
            "summary": self.summary,
            "issuetype": { "name": self.issue_type },
        });

        let description = self
            .description
            .as_deref()
            .filter(|d| !d.trim().is_empty());

        if let Some(map) = fields.as_object_mut() {
            if let Some(description) = description {
                map.insert("description".to_string(), adf_document(description));
            }
            if let Some(priority) = &self.priority {
                map.insert("priority".to_string(), json!({ "name": priority }));
            }
        }

        json!({ "fields": fields })
    }
}

/// `POST /rest/api/3/issue` response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatedIssue {
    pub id: String,
    pub key: String,
    #[serde(rename = "self", default)]
    pub self_url: Option<String>,
}

/// Wrap plain text in an Atlassian Document Format document.
///
/// Blank lines separate paragraphs; single newlines become hard breaks.
#[must_use]
pub fn adf_document(text: &str) -> Value {
    let paragraphs: Vec<Value> = text
        .split("\n\n")
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(|paragraph| {
            let mut content = Vec::new();
            for (i, line) in paragraph.lines().enumerate() {
                if i > 0 {
                    content.push(json!({ "type": "hardBreak" }));
                }
                content.push(json!({ "type": "text", "text": line }));
            }
            json!({ "type": "paragraph", "content": content })
        })
        .collect();

    json!({
        "type": "doc",
        "version": 1,
        "content": paragraphs,
    })
}
