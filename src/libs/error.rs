//! Domain error type shared by the record stores and the task service.

use std::fmt::{self, Display, Formatter};
use thiserror::Error;

/// Entity kinds that can fail to resolve by identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Entity {
    Project,
    Task,
    User,
}

impl Display for Entity {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let name = match self {
            Entity::Project => "Project",
            Entity::Task => "Task",
            Entity::User => "User",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Error)]
pub enum Error {
    /// The identifier does not resolve in the entity's record store.
    #[error("{entity} not found")]
    NotFound { entity: Entity, id: i64 },

    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// A store operation on the blocking pool panicked or was cancelled.
    #[error("store task failed: {0}")]
    Blocking(#[from] tokio::task::JoinError),
}

impl Error {
    pub fn not_found(entity: Entity, id: i64) -> Self {
        Error::NotFound { entity, id }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::NotFound { .. })
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
