//! Database schema migration management and versioning.
//!
//! Every service database goes through the same ordered list of migrations,
//! so a file created by one service can be opened by any other (the combined
//! `serve all` mode relies on this).
//!
//! ## Usage
//!
//! ```rust,no_run
//! use taskmesh::db::migrations::{init_with_migrations, get_db_version};
//! use rusqlite::Connection;
//!
//! # fn main() -> anyhow::Result<()> {
//! let mut conn = Connection::open("tasks.db")?;
//! init_with_migrations(&mut conn)?;
//! let version = get_db_version(&conn)?;
//! # Ok(())
//! # }
//! ```

use crate::libs::messages::Message;
use crate::{msg_debug, msg_error};
use anyhow::Result;
use rusqlite::{params, Connection, Transaction};

/// Tracking table recording every applied migration.
const MIGRATIONS_TABLE: &str = "
CREATE TABLE IF NOT EXISTS migrations (
    id INTEGER PRIMARY KEY,
    version INTEGER NOT NULL UNIQUE,
    name TEXT NOT NULL,
    applied_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
)";

#[derive(Debug, Clone)]
struct Migration {
    version: u32,
    name: &'static str,
    up: fn(&Transaction) -> Result<()>,
}

/// Registry of all migrations, applied in version order.
///
/// Each migration runs inside the same transaction as the insert into the
/// tracking table, so a failure leaves the schema at the previous version.
pub struct MigrationManager {
    migrations: Vec<Migration>,
}

impl MigrationManager {
    pub fn new() -> Self {
        let mut manager = Self { migrations: Vec::new() };
        manager.register_migrations();
        manager
    }

    fn register_migrations(&mut self) {
        // Version 1: one table per entity
        self.add_migration(1, "create_entity_tables", |tx| {
            tx.execute(
                "CREATE TABLE IF NOT EXISTS projects (
                    id INTEGER NOT NULL PRIMARY KEY,
                    title TEXT NOT NULL DEFAULT '',
                    description TEXT NOT NULL DEFAULT ''
                )",
                [],
            )?;

            tx.execute(
                "CREATE TABLE IF NOT EXISTS tasks (
                    id INTEGER NOT NULL PRIMARY KEY,
                    title TEXT NOT NULL DEFAULT '',
                    description TEXT NOT NULL DEFAULT '',
                    status TEXT NOT NULL DEFAULT '',
                    project_id INTEGER,
                    user_id INTEGER
                )",
                [],
            )?;

            tx.execute(
                "CREATE TABLE IF NOT EXISTS users (
                    id INTEGER NOT NULL PRIMARY KEY,
                    name TEXT NOT NULL DEFAULT '',
                    email TEXT NOT NULL DEFAULT ''
                )",
                [],
            )?;
            Ok(())
        });

        // Version 2: foreign-key lookups on tasks
        self.add_migration(2, "add_task_reference_indices", |tx| {
            tx.execute("CREATE INDEX IF NOT EXISTS idx_tasks_project_id ON tasks(project_id)", [])?;
            tx.execute("CREATE INDEX IF NOT EXISTS idx_tasks_user_id ON tasks(user_id)", [])?;
            Ok(())
        });
    }

    fn add_migration(&mut self, version: u32, name: &'static str, up: fn(&Transaction) -> Result<()>) {
        self.migrations.push(Migration { version, name, up });
    }

    /// Applies all migrations newer than the database's current version.
    pub fn run_migrations(&self, conn: &mut Connection) -> Result<()> {
        conn.execute(MIGRATIONS_TABLE, [])?;

        let current_version = self.get_current_version(conn)?;
        let pending: Vec<&Migration> = self.migrations.iter().filter(|m| m.version > current_version).collect();

        if pending.is_empty() {
            msg_debug!(Message::DatabaseUpToDate);
            return Ok(());
        }

        msg_debug!(Message::MigrationsFound(pending.len()));

        let tx = conn.transaction()?;

        for migration in pending {
            msg_debug!(Message::RunningMigration(migration.version, migration.name.to_string()));

            match (migration.up)(&tx) {
                Ok(()) => {
                    tx.execute(
                        "INSERT INTO migrations (version, name) VALUES (?1, ?2)",
                        params![migration.version, migration.name],
                    )?;
                    msg_debug!(Message::MigrationCompleted(migration.version));
                }
                Err(e) => {
                    msg_error!(Message::MigrationFailed(migration.version, e.to_string()));
                    return Err(e);
                }
            }
        }

        tx.commit()?;
        msg_debug!(Message::AllMigrationsCompleted);

        Ok(())
    }

    /// Highest applied version, or 0 for a fresh (or untracked) database.
    ///
    /// Errors other than a missing tracking table are returned as-is.
    fn get_current_version(&self, conn: &Connection) -> Result<u32> {
        if !Self::has_migrations_table(conn)? {
            return Ok(0);
        }

        let version: Option<u32> = conn.query_row("SELECT MAX(version) FROM migrations", [], |row| row.get(0))?;
        Ok(version.unwrap_or(0))
    }

    fn has_migrations_table(conn: &Connection) -> Result<bool> {
        let count: i64 = conn.query_row(
            "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = 'migrations'",
            [],
            |row| row.get(0),
        )?;
        Ok(count > 0)
    }

    fn latest_version(&self) -> u32 {
        self.migrations.last().map(|m| m.version).unwrap_or(0)
    }

    pub fn is_migration_applied(&self, conn: &Connection, version: u32) -> Result<bool> {
        let count: i64 = conn.query_row("SELECT COUNT(*) FROM migrations WHERE version = ?1", params![version], |row| row.get(0))?;

        Ok(count > 0)
    }

    /// Applied migrations as `(version, name, applied_at)`, oldest first.
    pub fn get_migration_history(&self, conn: &Connection) -> Result<Vec<(u32, String, String)>> {
        if !Self::has_migrations_table(conn)? {
            return Ok(Vec::new());
        }

        let mut stmt = conn.prepare("SELECT version, name, applied_at FROM migrations ORDER BY version")?;

        let history = stmt
            .query_map([], |row| Ok((row.get::<_, u32>(0)?, row.get::<_, String>(1)?, row.get::<_, String>(2)?)))?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(history)
    }
}

impl Default for MigrationManager {
    fn default() -> Self {
        Self::new()
    }
}

pub fn init_with_migrations(conn: &mut Connection) -> Result<()> {
    let manager = MigrationManager::new();
    manager.run_migrations(conn)?;
    Ok(())
}

pub fn get_db_version(conn: &Connection) -> Result<u32> {
    let manager = MigrationManager::new();
    manager.get_current_version(conn)
}

pub fn needs_migration(conn: &Connection) -> Result<bool> {
    let manager = MigrationManager::new();
    let current = manager.get_current_version(conn)?;
    Ok(current < manager.latest_version())
}
