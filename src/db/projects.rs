use super::db::Db;
use crate::libs::error::{Entity, Error, Result};
use crate::libs::project::{Project, ProjectDraft};
use rusqlite::{params, OptionalExtension, Row};

const INSERT_PROJECT: &str = "INSERT INTO projects (title, description) VALUES (?1, ?2)";
const SELECT_PROJECTS: &str = "SELECT id, title, description FROM projects";
const WHERE_ID: &str = "WHERE id = ?1";
const ORDER_BY_ID: &str = "ORDER BY id";
const UPDATE_PROJECT: &str = "UPDATE projects SET title = ?1, description = ?2 WHERE id = ?3";
const DELETE_PROJECT: &str = "DELETE FROM projects WHERE id = ?1";

#[derive(Clone)]
pub struct Projects {
    db: Db,
}

impl Projects {
    pub fn new(db: &Db) -> Projects {
        Projects { db: db.clone() }
    }

    pub fn insert(&self, draft: &ProjectDraft) -> Result<Project> {
        let conn = self.db.lock();
        conn.execute(INSERT_PROJECT, params![draft.title, draft.description])?;

        Ok(Project {
            id: conn.last_insert_rowid(),
            title: draft.title.clone(),
            description: draft.description.clone(),
        })
    }

    pub fn fetch(&self) -> Result<Vec<Project>> {
        let conn = self.db.lock();
        let mut stmt = conn.prepare(&format!("{} {}", SELECT_PROJECTS, ORDER_BY_ID))?;
        let projects = stmt.query_map([], Self::from_row)?.collect::<Result<Vec<_>, _>>()?;

        Ok(projects)
    }

    pub fn get_by_id(&self, id: i64) -> Result<Option<Project>> {
        let conn = self.db.lock();
        let project = conn
            .query_row(&format!("{} {}", SELECT_PROJECTS, WHERE_ID), params![id], Self::from_row)
            .optional()?;

        Ok(project)
    }

    /// Like [`get_by_id`](Self::get_by_id) but an absent project is an error.
    pub fn find_by_id(&self, id: i64) -> Result<Project> {
        self.get_by_id(id)?.ok_or_else(|| Error::not_found(Entity::Project, id))
    }

    /// Overwrites title and description. The identifier never changes.
    pub fn update(&self, id: i64, draft: &ProjectDraft) -> Result<Project> {
        let updated = self.db.lock().execute(UPDATE_PROJECT, params![draft.title, draft.description, id])?;
        if updated == 0 {
            return Err(Error::not_found(Entity::Project, id));
        }

        Ok(Project {
            id,
            title: draft.title.clone(),
            description: draft.description.clone(),
        })
    }

    /// Removes the project if present. Returns the number of deleted rows.
    pub fn delete(&self, id: i64) -> Result<usize> {
        Ok(self.db.lock().execute(DELETE_PROJECT, params![id])?)
    }

    fn from_row(row: &Row<'_>) -> rusqlite::Result<Project> {
        Ok(Project {
            id: row.get(0)?,
            title: row.get(1)?,
            description: row.get(2)?,
        })
    }
}
