//! # Taskmesh - projects, tasks and users as small REST services
//!
//! Three CRUD services backed by SQLite, with one inter-service call: task
//! views can be enriched with the owner's username, fetched from the users
//! service.
//!
//! ## Features
//!
//! - **Record stores**: one table per entity with versioned migrations
//! - **Name resolution**: HTTP or in-process, always falling back to `"Unknown"`
//! - **Task enrichment**: per-task owner lookups that preserve ordering
//! - **Deployment**: each service on its own port, or all in one process
//!
//! ## Usage
//!
//! ```rust,no_run
//! use taskmesh::commands::Cli;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     Cli::menu().await
//! }
//! ```

pub mod api;
pub mod commands;
pub mod db;
pub mod libs;
pub mod server;
