use serde::{Deserialize, Serialize};

/// A project record. Projects carry no relationship to other services.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: i64,
    pub title: String,
    pub description: String,
}

/// Request body for creating or updating a project.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProjectDraft {
    pub title: String,
    pub description: String,
}

impl ProjectDraft {
    pub fn new(title: &str, description: &str) -> Self {
        ProjectDraft {
            title: title.to_string(),
            description: description.to_string(),
        }
    }
}
