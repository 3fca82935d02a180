//! Command-line interface.
//!
//! `serve` runs the HTTP API. Every other task command is a client of that
//! API: it loads the list into a [`Board`], applies one action and prints
//! the result.
//!
//! ```rust,no_run
//! use todolist::commands::Cli;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     Cli::menu().await
//! }
//! ```

pub mod add;
pub mod delete;
pub mod init;
pub mod list;
pub mod render;
pub mod serve;
pub mod toggle;

use crate::api::http::HttpTodoApi;
use crate::libs::board::{Board, Outcome};
use crate::libs::config::Config;
use crate::libs::view::View;
use crate::{msg_error_anyhow, msg_print};
use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Run the task API server")]
    Serve(serve::ServeArgs),
    #[command(about = "Show all tasks")]
    List(list::ListArgs),
    #[command(about = "Add a task", arg_required_else_help = true)]
    Add(add::AddArgs),
    #[command(about = "Mark a task completed or not completed", arg_required_else_help = true)]
    Toggle(toggle::ToggleArgs),
    #[command(about = "Delete a task", arg_required_else_help = true)]
    Delete(delete::DeleteArgs),
    #[command(about = "Render the task board as HTML")]
    Render(render::RenderArgs),
    #[command(about = "Configuration initialization")]
    Init(init::InitArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub async fn menu() -> Result<()> {
        let cli = Self::parse();
        match cli.command {
            Commands::Serve(args) => serve::cmd(args).await,
            Commands::List(args) => list::cmd(args).await,
            Commands::Add(args) => add::cmd(args).await,
            Commands::Toggle(args) => toggle::cmd(args).await,
            Commands::Delete(args) => delete::cmd(args).await,
            Commands::Render(args) => render::cmd(args).await,
            Commands::Init(args) => init::cmd(args),
        }
    }
}

/// Connects to the configured API and loads the current list.
async fn open_board() -> Result<Board<HttpTodoApi>> {
    let config = Config::read()?;
    let api = HttpTodoApi::new(&config.client())?;

    let mut board = Board::new(api);
    let outcome = board.refresh().await;
    ensure_applied(&board, outcome)?;
    Ok(board)
}

/// Turns a failed or rejected action into an error carrying its reason.
fn ensure_applied(board: &Board<HttpTodoApi>, outcome: Outcome) -> Result<()> {
    match board.failure(outcome) {
        Some(reason) => Err(msg_error_anyhow!(reason)),
        None => Ok(()),
    }
}

fn print_summary(board: &Board<HttpTodoApi>) {
    msg_print!(View::summary(board.summary()));
}
