//! Display implementation for application messages.
//!
//! Every user-visible string is produced here so wording stays consistent
//! between terminal output, log lines and error values.

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === SERVICE MESSAGES ===
            Message::ServiceStarting(service, addr) => format!("Starting {} service on http://{}", service, addr),
            Message::ServiceStopped(service) => format!("{} service stopped", service),
            Message::ServiceResolverRemote(url, timeout) => format!("Resolving usernames via {} (timeout {} ms)", url, timeout),
            Message::ServiceResolverLocal => "Resolving usernames in-process".to_string(),
            Message::ShutdownSignalReceived => "Shutdown signal received, finishing in-flight requests".to_string(),

            // === TASK MESSAGES ===
            Message::TaskCreatedForUser(id, username) => format!("Task {} created for user: {}", id, username),
            Message::TaskUpdated(id) => format!("Task {} updated", id),
            Message::TaskDeleted(id) => format!("Task {} deleted", id),

            // === PROJECT / USER MESSAGES ===
            Message::ProjectCreated(id) => format!("Project {} created", id),
            Message::ProjectDeleted(id) => format!("Project {} deleted", id),
            Message::UserCreated(id) => format!("User {} created", id),
            Message::UserDeleted(id) => format!("User {} deleted", id),

            // === RESOLVER MESSAGES ===
            Message::NameResolveFailed(id, cause) => format!("Failed to resolve name of user {}: {}", id, cause),
            Message::NameResolveStatus(id, status) => format!("Users service answered {} for user {}", status, id),
            Message::NameResolveStoreFailed(id, cause) => format!("Failed to read user {} from store: {}", id, cause),

            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigDeleted => "Configuration file removed".to_string(),
            Message::ConfigFileNotFound => "Configuration file not found".to_string(),
            Message::ConfigModuleProjects => "Projects service".to_string(),
            Message::ConfigModuleTasks => "Tasks service".to_string(),
            Message::ConfigModuleUsers => "Users service".to_string(),
            Message::ConfigModuleResolver => "Username resolver".to_string(),
            Message::InvalidEnvValue(var, value) => format!("Ignoring invalid value '{}' of {}", value, var),

            // === PROMPTS ===
            Message::PromptSelectModules => "Select modules to configure".to_string(),
            Message::PromptServiceHost => "Listen host".to_string(),
            Message::PromptServicePort => "Listen port".to_string(),
            Message::PromptServiceDbFile => "Database file name".to_string(),
            Message::PromptUsersUrl => "Users service base URL".to_string(),
            Message::PromptResolverTimeout => "Name lookup timeout (ms)".to_string(),

            // === DATABASE / MIGRATION MESSAGES ===
            Message::DatabaseFileNotFound(path) => format!("Database file not found: {}", path),
            Message::DatabaseVersion(version) => format!("Current database version: {}", version),
            Message::DatabaseNeedsUpdate => "Database needs migration".to_string(),
            Message::DatabaseUpToDate => "Database is up to date".to_string(),
            Message::MigrationHistory => "Migration history:".to_string(),
            Message::NoMigrationsApplied => "No migrations applied yet".to_string(),
            Message::MigrationsFound(count) => format!("Found {} pending database migrations", count),
            Message::RunningMigration(version, name) => format!("Running migration v{}: {}", version, name),
            Message::MigrationCompleted(version) => format!("Migration v{} completed", version),
            Message::MigrationFailed(version, error) => format!("Migration v{} failed: {}", version, error),
            Message::AllMigrationsCompleted => "All migrations completed successfully".to_string(),
        };
        write!(f, "{}", text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_parameters() {
        assert_eq!(
            Message::ServiceStarting("tasks".to_string(), "127.0.0.1:8082".to_string()).to_string(),
            "Starting tasks service on http://127.0.0.1:8082"
        );
        assert_eq!(Message::TaskCreatedForUser(4, "Alice".to_string()).to_string(), "Task 4 created for user: Alice");
    }
}
