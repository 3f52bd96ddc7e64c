#[derive(Debug, Clone)]
pub enum Message {
    // === SERVICE MESSAGES ===
    ServiceStarting(String, String), // service, address
    ServiceStopped(String),
    ServiceResolverRemote(String, u64), // users url, timeout ms
    ServiceResolverLocal,
    ShutdownSignalReceived,

    // === TASK MESSAGES ===
    TaskCreatedForUser(i64, String), // task id, username
    TaskUpdated(i64),
    TaskDeleted(i64),

    // === PROJECT / USER MESSAGES ===
    ProjectCreated(i64),
    ProjectDeleted(i64),
    UserCreated(i64),
    UserDeleted(i64),

    // === RESOLVER MESSAGES ===
    NameResolveFailed(i64, String), // user id, cause
    NameResolveStatus(i64, u16),    // user id, status code
    NameResolveStoreFailed(i64, String),

    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigDeleted,
    ConfigFileNotFound,
    ConfigModuleProjects,
    ConfigModuleTasks,
    ConfigModuleUsers,
    ConfigModuleResolver,
    InvalidEnvValue(String, String), // variable, value

    // === PROMPTS ===
    PromptSelectModules,
    PromptServiceHost,
    PromptServicePort,
    PromptServiceDbFile,
    PromptUsersUrl,
    PromptResolverTimeout,

    // === DATABASE / MIGRATION MESSAGES ===
    DatabaseFileNotFound(String),
    DatabaseVersion(u32),
    DatabaseNeedsUpdate,
    DatabaseUpToDate,
    MigrationHistory,
    NoMigrationsApplied,
    MigrationsFound(usize),
    RunningMigration(u32, String),
    MigrationCompleted(u32),
    MigrationFailed(u32, String),
    AllMigrationsCompleted,
}
