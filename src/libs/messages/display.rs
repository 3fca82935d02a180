//! Display implementation for todolist messages.
//!
//! All user-facing text is defined here, in one match, so that the server
//! envelopes, the board notices and the console output stay consistent.
//!
//! ```rust
//! use todolist::libs::messages::Message;
//!
//! assert_eq!(Message::TodoNotFound.to_string(), "Todo not found");
//! ```

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === TODO API MESSAGES ===
            Message::TodoCreated => "Todo created successfully".to_string(),
            Message::TodoUpdated => "Todo updated successfully".to_string(),
            Message::TodoDeleted => "Todo deleted successfully".to_string(),
            Message::TodoNotFound => "Todo not found".to_string(),
            Message::TodosFetchFailed => "Failed to fetch todos".to_string(),
            Message::TodoCreateFailed => "Failed to create todo".to_string(),
            Message::TodoUpdateFailed => "Failed to update todo".to_string(),
            Message::TodoDeleteFailed => "Failed to delete todo".to_string(),
            Message::EndpointNotFound => "Endpoint not found".to_string(),

            // === SERVER MESSAGES ===
            Message::ServerListening(address) => format!("Server running on http://{}", address),
            Message::ServerShuttingDown => "Shutting down server gracefully...".to_string(),
            Message::ServerStopped => "Server stopped".to_string(),
            Message::ReceivedSigterm => "SIGTERM received, closing server gracefully...".to_string(),
            Message::ReceivedSigint => "SIGINT received, closing server gracefully...".to_string(),
            Message::CtrlCListenFailed(error) => format!("Failed to listen for Ctrl-C: {}", error),
            Message::SignalHandlingNotSupported => "Signal handling is not supported on this platform".to_string(),
            Message::DatabaseOpened(path) => format!("Using database at {}", path),

            // === MIGRATION MESSAGES ===
            Message::DatabaseUpToDate => "Database is up to date".to_string(),
            Message::MigrationsFound(count) => format!("Found {} pending migration(s)", count),
            Message::RunningMigration(version, name) => format!("Running migration v{}: {}", version, name),
            Message::MigrationCompleted(version) => format!("Migration v{} completed", version),
            Message::MigrationFailed(version, error) => format!("Migration v{} failed: {}", version, error),
            Message::AllMigrationsCompleted => "All migrations completed successfully".to_string(),

            // === BOARD MESSAGES ===
            Message::TodoTitleEmpty => "Task title must not be empty".to_string(),
            Message::TodosLoadFailed => "Failed to load tasks".to_string(),
            Message::TodoAddFailed => "Failed to create task".to_string(),
            Message::TodoToggleFailed => "Failed to update task".to_string(),
            Message::TodoRemoveFailed => "Failed to delete task".to_string(),
            Message::TodosLoadError(error) => format!("Error while loading tasks: {}", error),
            Message::TodoAddError(error) => format!("Error while creating task: {}", error),
            Message::TodoToggleError(error) => format!("Error while updating task: {}", error),
            Message::TodoRemoveError(error) => format!("Error while deleting task: {}", error),
            Message::ConfirmDeleteTodo => "Do you really want to delete this task?".to_string(),
            Message::TodoNotInList(id) => format!("Task {} is not in the current list", id),
            Message::OperationCancelled => "Operation cancelled".to_string(),
            Message::OperationFailed => "Operation failed".to_string(),

            // === VIEW MESSAGES ===
            Message::TodosHeader => "Tasks:".to_string(),
            Message::NoTodosYet => "No tasks yet. Add your first one!".to_string(),
            Message::SummaryLine { total, completed, remaining } => {
                format!("Total: {} | Completed: {} | Remaining: {}", total, completed, remaining)
            }
            Message::TodoAdded(title) => format!("Task '{}' added", title),
            Message::TodoToggled(id, true) => format!("Task {} marked as completed", id),
            Message::TodoToggled(id, false) => format!("Task {} marked as not completed", id),
            Message::TodoRemoved(id) => format!("Task {} deleted", id),

            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigDeleted => "Configuration removed".to_string(),
            Message::ConfigNotFound => "No configuration file to remove".to_string(),
            Message::ConfigModuleServer => "Server settings".to_string(),
            Message::ConfigModuleClient => "Client settings".to_string(),
            Message::PromptSelectModules => "Select modules to configure".to_string(),
            Message::PromptServerHost => "Host to bind".to_string(),
            Message::PromptServerPort => "Port to listen on".to_string(),
            Message::PromptDatabasePath => "Database file (empty for default)".to_string(),
            Message::PromptApiUrl => "API base URL".to_string(),
            Message::PromptRequestTimeout => "Request timeout in seconds".to_string(),
            Message::InvalidEnvValue(key, value) => format!("Ignoring invalid value '{}' for {}", value, key),
        };
        write!(f, "{}", text)
    }
}
