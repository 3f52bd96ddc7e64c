use super::db::Db;
use crate::libs::error::Result;
use crate::libs::user::{User, UserDraft};
use rusqlite::{params, OptionalExtension, Row};

const INSERT_USER: &str = "INSERT INTO users (name, email) VALUES (?1, ?2)";
const SELECT_USERS: &str = "SELECT id, name, email FROM users";
const WHERE_ID: &str = "WHERE id = ?1";
const ORDER_BY_ID: &str = "ORDER BY id";
const DELETE_USER: &str = "DELETE FROM users WHERE id = ?1";

#[derive(Clone)]
pub struct Users {
    db: Db,
}

impl Users {
    pub fn new(db: &Db) -> Users {
        Users { db: db.clone() }
    }

    pub fn insert(&self, draft: &UserDraft) -> Result<User> {
        let conn = self.db.lock();
        conn.execute(INSERT_USER, params![draft.name, draft.email])?;

        Ok(User {
            id: conn.last_insert_rowid(),
            name: draft.name.clone(),
            email: draft.email.clone(),
        })
    }

    pub fn fetch(&self) -> Result<Vec<User>> {
        let conn = self.db.lock();
        let mut stmt = conn.prepare(&format!("{} {}", SELECT_USERS, ORDER_BY_ID))?;
        let users = stmt.query_map([], Self::from_row)?.collect::<Result<Vec<_>, _>>()?;

        Ok(users)
    }

    pub fn get_by_id(&self, id: i64) -> Result<Option<User>> {
        let conn = self.db.lock();
        let user = conn
            .query_row(&format!("{} {}", SELECT_USERS, WHERE_ID), params![id], Self::from_row)
            .optional()?;

        Ok(user)
    }

    pub fn delete(&self, id: i64) -> Result<usize> {
        Ok(self.db.lock().execute(DELETE_USER, params![id])?)
    }

    fn from_row(row: &Row<'_>) -> rusqlite::Result<User> {
        Ok(User {
            id: row.get(0)?,
            name: row.get(1)?,
            email: row.get(2)?,
        })
    }
}
