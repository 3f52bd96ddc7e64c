//! Task operations and owner-name enrichment.
//!
//! [`TaskService`] wraps the task store and a [`NameResolver`]. Plain record
//! operations delegate to the store; the `*_with_username` operations attach
//! the owner's display name to each task.
//!
//! ## Fan-out
//!
//! Enriching a list issues one resolver call per task, in input order, with
//! no deduplication of owners shared between tasks. With the HTTP resolver a
//! list of `n` tasks costs `n` requests to the users service. Each call is
//! bounded by the resolver's timeout and falls back to
//! [`FALLBACK_NAME`](crate::libs::user::FALLBACK_NAME), so a slow or absent
//! users service degrades names, never the task listing itself.

use crate::api::NameResolver;
use crate::db::{db::blocking, tasks::Tasks};
use crate::libs::error::{Entity, Error, Result};
use crate::libs::messages::Message;
use crate::libs::task::{EnrichedTask, Task, TaskDraft, TaskFilter};
use crate::libs::user::FALLBACK_NAME;
use std::sync::Arc;
use tracing::info;

#[derive(Clone)]
pub struct TaskService {
    tasks: Tasks,
    resolver: Arc<dyn NameResolver>,
}

impl TaskService {
    pub fn new(tasks: Tasks, resolver: Arc<dyn NameResolver>) -> Self {
        Self { tasks, resolver }
    }

    /// Stores a new task and logs the owner's resolved name.
    ///
    /// Name resolution cannot fail, so an unreachable users service never
    /// prevents creation.
    pub async fn create(&self, draft: TaskDraft) -> Result<Task> {
        let username = self.owner_name(draft.user_id).await;
        let tasks = self.tasks.clone();
        let task = blocking(move || tasks.insert(&draft)).await?;
        info!(task_id = task.id, "{}", Message::TaskCreatedForUser(task.id, username));

        Ok(task)
    }

    pub fn find_all(&self) -> Result<Vec<Task>> {
        self.tasks.fetch(TaskFilter::All)
    }

    pub fn find_by_project(&self, project_id: i64) -> Result<Vec<Task>> {
        self.tasks.fetch(TaskFilter::ByProject(project_id))
    }

    pub fn find_by_id(&self, id: i64) -> Result<Option<Task>> {
        self.tasks.get_by_id(id)
    }

    pub fn update(&self, id: i64, draft: &TaskDraft) -> Result<Task> {
        let task = self.tasks.update(id, draft)?;
        info!(task_id = id, "{}", Message::TaskUpdated(id));
        Ok(task)
    }

    /// Deleting an absent task is not an error.
    pub fn delete(&self, id: i64) -> Result<()> {
        if self.tasks.delete(id)? > 0 {
            info!(task_id = id, "{}", Message::TaskDeleted(id));
        }
        Ok(())
    }

    /// Attaches the owner's name to one task. Calls the resolver exactly once
    /// when the task has an owner.
    pub async fn enrich_one(&self, task: Task) -> EnrichedTask {
        let username = self.owner_name(task.user_id).await;
        EnrichedTask::new(task, username)
    }

    /// Enriches every task, preserving input order.
    pub async fn enrich_many(&self, tasks: Vec<Task>) -> Vec<EnrichedTask> {
        let mut enriched = Vec::with_capacity(tasks.len());
        for task in tasks {
            enriched.push(self.enrich_one(task).await);
        }
        enriched
    }

    pub async fn find_all_with_usernames(&self) -> Result<Vec<EnrichedTask>> {
        let store = self.tasks.clone();
        let tasks = blocking(move || store.fetch(TaskFilter::All)).await?;
        Ok(self.enrich_many(tasks).await)
    }

    /// Fails with `NotFound` when `id` is not in the store.
    pub async fn find_by_id_with_username(&self, id: i64) -> Result<EnrichedTask> {
        let store = self.tasks.clone();
        let task = blocking(move || store.get_by_id(id)).await?;
        let task = task.ok_or_else(|| Error::not_found(Entity::Task, id))?;
        Ok(self.enrich_one(task).await)
    }

    async fn owner_name(&self, user_id: Option<i64>) -> String {
        match user_id {
            Some(user_id) => self.resolver.resolve(user_id).await,
            None => FALLBACK_NAME.to_string(),
        }
    }
}
