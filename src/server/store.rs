use crate::db::db::Db;
use crate::db::todos::{StoreError, StoreResult, Todos};
use crate::libs::messages::Message;
use crate::libs::todo::{NewTodo, Todo, TodoId};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::task;

/// Async handle to the task database shared by all request handlers.
///
/// Each operation opens its own connection on the blocking pool, so
/// requests never share a session and a slow query cannot stall the runtime.
#[derive(Debug, Clone)]
pub struct Store {
    path: Arc<PathBuf>,
}

impl Store {
    /// Opens (creating if needed) the database at `path` and migrates it.
    pub fn open(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref().to_path_buf();
        Db::open(&path)?;
        tracing::info!("{}", Message::DatabaseOpened(path.display().to_string()));

        Ok(Self { path: Arc::new(path) })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub async fn list(&self) -> StoreResult<Vec<Todo>> {
        self.run(|todos| todos.list()).await
    }

    /// Validates `title` and inserts it.
    pub async fn create(&self, title: Option<String>) -> StoreResult<Todo> {
        let new_todo = NewTodo::parse(title.as_deref())?;
        self.run(move |todos| todos.insert(&new_todo)).await
    }

    pub async fn toggle(&self, id: TodoId) -> StoreResult<Todo> {
        self.run(move |todos| todos.toggle(id)).await
    }

    pub async fn delete(&self, id: TodoId) -> StoreResult<()> {
        self.run(move |todos| todos.delete(id)).await
    }

    async fn run<T, F>(&self, operation: F) -> StoreResult<T>
    where
        T: Send + 'static,
        F: FnOnce(&Todos) -> StoreResult<T> + Send + 'static,
    {
        let path = Arc::clone(&self.path);
        task::spawn_blocking(move || {
            let todos = Todos::connect(&path)?;
            operation(&todos)
        })
        .await
        .map_err(|e| StoreError::Worker(e.to_string()))?
    }
}
