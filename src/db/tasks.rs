use super::db::Db;
use crate::libs::error::{Entity, Error, Result};
use crate::libs::task::{Task, TaskDraft, TaskFilter};
use rusqlite::{params, params_from_iter, OptionalExtension, Row};

const INSERT_TASK: &str = "INSERT INTO tasks (title, description, status, project_id, user_id) VALUES (?1, ?2, ?3, ?4, ?5)";
const SELECT_TASKS: &str = "SELECT id, title, description, status, project_id, user_id FROM tasks";
const WHERE_ID: &str = "WHERE id = ?1";
const WHERE_PROJECT: &str = "WHERE project_id = ?1";
const ORDER_BY_ID: &str = "ORDER BY id";
const UPDATE_TASK: &str = "UPDATE tasks SET title = ?1, description = ?2, status = ?3, project_id = ?4, user_id = ?5 WHERE id = ?6";
const DELETE_TASK: &str = "DELETE FROM tasks WHERE id = ?1";

#[derive(Clone)]
pub struct Tasks {
    db: Db,
}

impl Tasks {
    pub fn new(db: &Db) -> Tasks {
        Tasks { db: db.clone() }
    }

    pub fn insert(&self, draft: &TaskDraft) -> Result<Task> {
        let conn = self.db.lock();
        conn.execute(
            INSERT_TASK,
            params![draft.title, draft.description, draft.status, draft.project_id, draft.user_id],
        )?;

        Ok(Self::with_id(conn.last_insert_rowid(), draft))
    }

    pub fn fetch(&self, filter: TaskFilter) -> Result<Vec<Task>> {
        let conn = self.db.lock();
        let (mut stmt, params) = match filter {
            TaskFilter::All => (conn.prepare(&format!("{} {}", SELECT_TASKS, ORDER_BY_ID))?, vec![]),
            TaskFilter::ByProject(project_id) => (
                conn.prepare(&format!("{} {} {}", SELECT_TASKS, WHERE_PROJECT, ORDER_BY_ID))?,
                vec![project_id],
            ),
        };

        let tasks = stmt
            .query_map(params_from_iter(params.iter()), Self::from_row)?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(tasks)
    }

    pub fn get_by_id(&self, id: i64) -> Result<Option<Task>> {
        let conn = self.db.lock();
        let task = conn
            .query_row(&format!("{} {}", SELECT_TASKS, WHERE_ID), params![id], Self::from_row)
            .optional()?;

        Ok(task)
    }

    /// Overwrites title, description, status, project and owner of an
    /// existing task. The identifier never changes.
    pub fn update(&self, id: i64, draft: &TaskDraft) -> Result<Task> {
        let updated = self.db.lock().execute(
            UPDATE_TASK,
            params![draft.title, draft.description, draft.status, draft.project_id, draft.user_id, id],
        )?;
        if updated == 0 {
            return Err(Error::not_found(Entity::Task, id));
        }

        Ok(Self::with_id(id, draft))
    }

    /// Removes the task if present. Returns the number of deleted rows.
    pub fn delete(&self, id: i64) -> Result<usize> {
        Ok(self.db.lock().execute(DELETE_TASK, params![id])?)
    }

    fn with_id(id: i64, draft: &TaskDraft) -> Task {
        Task {
            id,
            title: draft.title.clone(),
            description: draft.description.clone(),
            status: draft.status.clone(),
            project_id: draft.project_id,
            user_id: draft.user_id,
        }
    }

    fn from_row(row: &Row<'_>) -> rusqlite::Result<Task> {
        Ok(Task {
            id: row.get(0)?,
            title: row.get(1)?,
            description: row.get(2)?,
            status: row.get(3)?,
            project_id: row.get(4)?,
            user_id: row.get(5)?,
        })
    }
}
