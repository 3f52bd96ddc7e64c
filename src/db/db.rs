use super::migrations::init_with_migrations;
use crate::libs::data_storage::DataStorage;
use crate::libs::error;
use crate::libs::messages::Message;
use crate::msg_bail_anyhow;
use anyhow::Result;
use parking_lot::{Mutex, MutexGuard};
use rusqlite::Connection;
use std::path::Path;
use std::sync::Arc;

/// Shared handle to one service's SQLite database.
///
/// Cloning is cheap; every clone talks to the same connection. Callers take
/// the lock for the duration of a single statement and must not hold it
/// across an `.await`.
#[derive(Clone)]
pub struct Db {
    conn: Arc<Mutex<Connection>>,
}

impl Db {
    /// Opens `file_name` inside the application data directory and applies
    /// pending migrations.
    pub fn new(file_name: &str) -> Result<Db> {
        let db_file_path = DataStorage::new().get_path(file_name)?;
        Self::open(db_file_path)
    }

    pub fn open(path: impl AsRef<Path>) -> Result<Db> {
        let mut conn = Connection::open(path)?;
        init_with_migrations(&mut conn)?;

        Ok(Self::from_connection(conn))
    }

    pub fn in_memory() -> Result<Db> {
        let mut conn = Connection::open_in_memory()?;
        init_with_migrations(&mut conn)?;

        Ok(Self::from_connection(conn))
    }

    /// Opens the database file without touching its schema, for inspection.
    ///
    /// Fails when the file does not exist rather than creating an empty one.
    pub fn new_without_migrations(file_name: &str) -> Result<Connection> {
        let db_file_path = DataStorage::new().get_path(file_name)?;
        if !db_file_path.exists() {
            msg_bail_anyhow!(Message::DatabaseFileNotFound(db_file_path.display().to_string()));
        }
        Ok(Connection::open(db_file_path)?)
    }

    pub fn lock(&self) -> MutexGuard<'_, Connection> {
        self.conn.lock()
    }

    fn from_connection(conn: Connection) -> Db {
        Db {
            conn: Arc::new(Mutex::new(conn)),
        }
    }
}

/// Runs a store operation on tokio's blocking pool so that a slow query
/// does not stall the async worker serving other requests.
pub async fn blocking<T, F>(op: F) -> error::Result<T>
where
    F: FnOnce() -> error::Result<T> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(op).await?
}
