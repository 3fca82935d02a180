//! # todolist
//!
//! A small task list: an HTTP API that keeps tasks in SQLite, and a client
//! view model that mirrors the list, applies user actions and renders it.
//!
//! ## Features
//!
//! - **Task API**: list, create, toggle and delete over JSON envelopes
//! - **Persistence**: SQLite with versioned migrations
//! - **Board**: a client-side mirror with transient notices and HTML rendering
//! - **CLI**: `serve` plus client commands backed by the same board
//!
//! ## Usage
//!
//! ```rust,no_run
//! use todolist::commands::Cli;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     Cli::menu().await
//! }
//! ```

pub mod api;
pub mod commands;
pub mod db;
pub mod libs;
pub mod server;
