use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub status: String,
    pub project_id: Option<i64>,
    pub user_id: Option<i64>,
}

/// Request body for creating a task, and the patch applied on update.
///
/// On update every field overwrites the stored value, including a missing
/// `projectId` or `userId` which clears the reference.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TaskDraft {
    pub title: String,
    pub description: String,
    pub status: String,
    pub project_id: Option<i64>,
    pub user_id: Option<i64>,
}

impl TaskDraft {
    pub fn new(title: &str, description: &str, status: &str) -> Self {
        TaskDraft {
            title: title.to_string(),
            description: description.to_string(),
            status: status.to_string(),
            project_id: None,
            user_id: None,
        }
    }

    pub fn project(mut self, project_id: i64) -> Self {
        self.project_id = Some(project_id);
        self
    }

    pub fn owner(mut self, user_id: i64) -> Self {
        self.user_id = Some(user_id);
        self
    }
}

/// A task together with its owner's display name. Built per request and
/// never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrichedTask {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub status: String,
    pub project_id: Option<i64>,
    pub user_id: Option<i64>,
    pub username: String,
}

impl EnrichedTask {
    pub fn new(task: Task, username: String) -> Self {
        EnrichedTask {
            id: task.id,
            title: task.title,
            description: task.description,
            status: task.status,
            project_id: task.project_id,
            user_id: task.user_id,
            username,
        }
    }
}

#[derive(Debug, Clone)]
pub enum TaskFilter {
    All,
    ByProject(i64),
}
