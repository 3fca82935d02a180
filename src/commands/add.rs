use super::{ensure_applied, open_board, print_summary};
use crate::libs::messages::Message;
use crate::msg_success;
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct AddArgs {
    /// Task title; multiple words are joined with spaces
    #[arg(required = true)]
    title: Vec<String>,
}

pub async fn cmd(add_args: AddArgs) -> Result<()> {
    let mut board = open_board().await?;

    let outcome = board.submit(&add_args.title.join(" ")).await;
    ensure_applied(&board, outcome)?;

    if let Some(todo) = board.todos().first() {
        msg_success!(Message::TodoAdded(todo.title.clone()));
    }
    print_summary(&board);

    Ok(())
}
