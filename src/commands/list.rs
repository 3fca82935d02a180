use super::{open_board, print_summary};
use crate::libs::messages::Message;
use crate::libs::view::View;
use crate::{msg_info, msg_print};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct ListArgs {
    /// Print the tasks as JSON instead of a table
    #[arg(long)]
    json: bool,
}

pub async fn cmd(list_args: ListArgs) -> Result<()> {
    let board = open_board().await?;

    if list_args.json {
        println!("{}", serde_json::to_string_pretty(board.todos())?);
        return Ok(());
    }

    if board.todos().is_empty() {
        msg_info!(Message::NoTodosYet);
    } else {
        msg_print!(Message::TodosHeader);
        View::todos(board.todos());
    }
    print_summary(&board);

    Ok(())
}
