//! Record stores for the three services.
//!
//! Each service keeps its records in its own SQLite file (or shares one file
//! when all services run in a single process). The schema is owned by the
//! migration system in [`migrations`]; the entity modules only issue queries.
//!
//! ```rust,no_run
//! use taskmesh::db::{db::Db, tasks::Tasks};
//! use taskmesh::libs::task::TaskDraft;
//!
//! # fn main() -> anyhow::Result<()> {
//! let db = Db::new("tasks.db")?;
//! let tasks = Tasks::new(&db);
//! let task = tasks.insert(&TaskDraft::new("Review code", "Check PR #123", "TODO").owner(1))?;
//! assert!(tasks.get_by_id(task.id)?.is_some());
//! # Ok(())
//! # }
//! ```

/// Connection handle and constructors.
pub mod db;

/// Versioned schema migrations.
pub mod migrations;

/// Project records.
pub mod projects;

/// Task records, including lookup by project.
pub mod tasks;

/// User records.
pub mod users;
