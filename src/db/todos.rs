use super::db::Db;
use crate::libs::todo::{NewTodo, Todo, TodoId, ValidationError};
use chrono::Utc;
use rusqlite::{params, Connection, OptionalExtension, Row};
use std::path::Path;
use thiserror::Error;

const INSERT_TODO: &str = "INSERT INTO todos (title, completed, created_at) VALUES (?1, 0, ?2) RETURNING id, title, completed, created_at";
const SELECT_TODOS: &str = "SELECT id, title, completed, created_at FROM todos ORDER BY created_at DESC, id DESC";
const SELECT_TODO: &str = "SELECT id, title, completed, created_at FROM todos WHERE id = ?1";
const TOGGLE_TODO: &str = "UPDATE todos SET completed = NOT completed WHERE id = ?1 RETURNING id, title, completed, created_at";
const DELETE_TODO: &str = "DELETE FROM todos WHERE id = ?1";
const COUNT_TODOS: &str = "SELECT COUNT(*) FROM todos";

/// Fixed-width UTC timestamps so the text column sorts chronologically.
const CREATED_AT_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.6f+00:00";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("Todo not found")]
    NotFound(TodoId),
    #[error("{0}")]
    Database(#[from] rusqlite::Error),
    /// The blocking task running the query panicked or was cancelled.
    #[error("storage worker failed: {0}")]
    Worker(String),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Repository over the `todos` table.
pub struct Todos {
    pub conn: Connection,
}

impl Todos {
    /// Opens `path` assuming its schema is already migrated.
    pub fn connect(path: &Path) -> StoreResult<Todos> {
        let db = Db::connect(path)?;
        Ok(Todos { conn: db.conn })
    }

    /// All tasks, newest first. Equal timestamps fall back to the higher id.
    pub fn list(&self) -> StoreResult<Vec<Todo>> {
        let mut stmt = self.conn.prepare(SELECT_TODOS)?;
        let todos = stmt.query_map([], row_to_todo)?.collect::<Result<Vec<_>, _>>()?;

        Ok(todos)
    }

    /// Inserts an open task stamped with the current time.
    pub fn insert(&self, new_todo: &NewTodo) -> StoreResult<Todo> {
        let created_at = Utc::now().format(CREATED_AT_FORMAT).to_string();
        let todo = self.conn.query_row(INSERT_TODO, params![new_todo.title(), created_at], row_to_todo)?;

        Ok(todo)
    }

    pub fn get_by_id(&self, id: TodoId) -> StoreResult<Todo> {
        self.conn
            .query_row(SELECT_TODO, params![id.get()], row_to_todo)
            .optional()?
            .ok_or(StoreError::NotFound(id))
    }

    /// Flips `completed` in a single statement, so concurrent toggles never
    /// read a stale value.
    pub fn toggle(&self, id: TodoId) -> StoreResult<Todo> {
        self.conn
            .query_row(TOGGLE_TODO, params![id.get()], row_to_todo)
            .optional()?
            .ok_or(StoreError::NotFound(id))
    }

    pub fn delete(&self, id: TodoId) -> StoreResult<()> {
        match self.conn.execute(DELETE_TODO, params![id.get()])? {
            0 => Err(StoreError::NotFound(id)),
            _ => Ok(()),
        }
    }

    pub fn count(&self) -> StoreResult<usize> {
        let count: i64 = self.conn.query_row(COUNT_TODOS, [], |row| row.get(0))?;
        Ok(count as usize)
    }
}

fn row_to_todo(row: &Row) -> rusqlite::Result<Todo> {
    let id: i64 = row.get(0)?;
    let id = TodoId::new(id).map_err(|e| rusqlite::Error::FromSqlConversionFailure(0, rusqlite::types::Type::Integer, Box::new(e)))?;

    Ok(Todo {
        id,
        title: row.get(1)?,
        completed: row.get(2)?,
        created_at: row.get(3)?,
    })
}
