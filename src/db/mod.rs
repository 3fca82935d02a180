//! Database layer for todolist.
//!
//! SQLite persistence for tasks, built on `rusqlite` with a bundled SQLite.
//!
//! - [`db`]: connection opening and the database file name
//! - [`migrations`]: versioned schema changes tracked in a `migrations` table
//! - [`todos`]: the repository behind every API operation
//!
//! ```rust,no_run
//! use todolist::db::{db::Db, todos::Todos};
//! use todolist::libs::todo::NewTodo;
//! use std::path::Path;
//!
//! let path = Path::new("todolist.db");
//! Db::open(path)?;
//! let todos = Todos::connect(path)?;
//! let created = todos.insert(&NewTodo::parse(Some("Buy milk"))?)?;
//! let toggled = todos.toggle(created.id)?;
//! assert!(toggled.completed);
//! # Ok::<(), anyhow::Error>(())
//! ```

/// Connection opening and configuration.
pub mod db;

/// Schema migration system.
pub mod migrations;

/// Task persistence.
pub mod todos;
