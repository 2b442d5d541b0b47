/// Every user-facing text of the application.
///
/// Text lives in the `Display` impl in `display.rs`; call sites only pick a
/// variant and its parameters.
#[derive(Debug, Clone)]
pub enum Message {
    // === TASK MESSAGES ===
    TaskCreated(String), // id
    TaskCompleted(String),
    TaskAlreadyCompleted(String),
    TaskDeleted(String),
    TasksNotFound,
    TaskDetailsHeader,
    ConfirmDeleteTask(String), // description
    DeleteCancelled,
    InvalidDueDate(String),

    // === STORAGE MESSAGES ===
    StorageModeUpdated(String),
    CsvRowsSkipped(usize),

    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigDeleted,
    ConfigModuleStorage,
    ConfigModuleColumns,
    PromptStorageMode,
    PromptDisplayColumns,

    // === DATABASE MESSAGES ===
    DatabaseVersion(u32),
    DatabaseNeedsUpdate,
    DatabaseUpToDate,
    RunningMigration(u32, String), // version, name
    MigrationHistory,
}
