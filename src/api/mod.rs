//! Username resolution for task enrichment.
//!
//! The task service never talks to the users store directly. It depends on
//! the [`NameResolver`] capability, with two transports:
//!
//! - [`UsersClient`]: HTTP client of the users service's
//!   `GET /users/{id}/name` endpoint, used when services run separately.
//! - [`LocalNameResolver`]: in-process lookup against the users store, used
//!   by `serve all`.
//!
//! ## Contract
//!
//! `resolve` never fails. An absent user, a transport error, a timeout or an
//! unexpected response all yield [`FALLBACK_NAME`]. Callers can therefore
//! enrich records without any error handling of their own.
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use std::time::Duration;
//! use taskmesh::api::{NameResolver, UsersClient};
//!
//! # async fn run() -> anyhow::Result<()> {
//! let resolver: Arc<dyn NameResolver> = Arc::new(UsersClient::new("http://127.0.0.1:8083", Duration::from_secs(2))?);
//! let name = resolver.resolve(100).await;
//! # Ok(())
//! # }
//! ```

use async_trait::async_trait;

pub mod local;
pub mod users;

pub use crate::libs::user::FALLBACK_NAME;
pub use local::LocalNameResolver;
pub use users::UsersClient;

/// Resolves a user reference to a display name.
#[async_trait]
pub trait NameResolver: Send + Sync {
    /// Returns the user's name, or [`FALLBACK_NAME`] when it cannot be
    /// determined for any reason.
    async fn resolve(&self, user_id: i64) -> String;
}
