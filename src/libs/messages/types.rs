/// Every user-facing text in the application.
///
/// Variants are grouped by the part of the system that emits them. The text
/// itself lives in the `Display` impl in `display.rs`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    // === TODO API MESSAGES ===
    TodoCreated,
    TodoUpdated,
    TodoDeleted,
    TodoNotFound,
    TodosFetchFailed,
    TodoCreateFailed,
    TodoUpdateFailed,
    TodoDeleteFailed,
    EndpointNotFound,

    // === SERVER MESSAGES ===
    ServerListening(String), // address
    ServerShuttingDown,
    ServerStopped,
    ReceivedSigterm,
    ReceivedSigint,
    CtrlCListenFailed(String),
    SignalHandlingNotSupported,
    DatabaseOpened(String), // path

    // === MIGRATION MESSAGES ===
    DatabaseUpToDate,
    MigrationsFound(usize),
    RunningMigration(u32, String),
    MigrationCompleted(u32),
    MigrationFailed(u32, String),
    AllMigrationsCompleted,

    // === BOARD MESSAGES ===
    TodoTitleEmpty,
    TodosLoadFailed,
    TodoAddFailed,
    TodoToggleFailed,
    TodoRemoveFailed,
    TodosLoadError(String),
    TodoAddError(String),
    TodoToggleError(String),
    TodoRemoveError(String),
    ConfirmDeleteTodo,
    TodoNotInList(i64),
    OperationCancelled,
    OperationFailed,

    // === VIEW MESSAGES ===
    TodosHeader,
    NoTodosYet,
    SummaryLine { total: usize, completed: usize, remaining: usize },
    TodoAdded(String),
    TodoToggled(i64, bool),
    TodoRemoved(i64),

    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigDeleted,
    ConfigNotFound,
    ConfigModuleServer,
    ConfigModuleClient,
    PromptSelectModules,
    PromptServerHost,
    PromptServerPort,
    PromptDatabasePath,
    PromptApiUrl,
    PromptRequestTimeout,
    InvalidEnvValue(String, String), // key, value
}
