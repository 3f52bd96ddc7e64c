//! Core library modules: domain types, the task service and the ambient
//! infrastructure (configuration, data directory, logging, messages).
//!
//! ## Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use taskmesh::api::LocalNameResolver;
//! use taskmesh::db::{db::Db, tasks::Tasks, users::Users};
//! use taskmesh::libs::task::TaskDraft;
//! use taskmesh::libs::task_service::TaskService;
//!
//! # async fn run() -> anyhow::Result<()> {
//! let db = Db::in_memory()?;
//! let resolver = Arc::new(LocalNameResolver::new(&Users::new(&db)));
//! let service = TaskService::new(Tasks::new(&db), resolver);
//! let task = service.create(TaskDraft::new("Write docs", "", "TODO").owner(1)).await?;
//! let enriched = service.find_by_id_with_username(task.id).await?;
//! assert_eq!(enriched.username, "Unknown");
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod data_storage;
pub mod error;
pub mod logging;
pub mod messages;
pub mod project;
pub mod task;
pub mod task_service;
pub mod user;
