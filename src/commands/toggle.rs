use super::{ensure_applied, open_board, print_summary};
use crate::libs::board::Outcome;
use crate::libs::messages::Message;
use crate::libs::todo::TodoId;
use crate::{msg_success, msg_warning};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct ToggleArgs {
    /// Task ID
    id: TodoId,
}

pub async fn cmd(toggle_args: ToggleArgs) -> Result<()> {
    let mut board = open_board().await?;
    let id = toggle_args.id;

    if !board.contains(id) {
        msg_warning!(Message::TodoNotInList(id.get()));
    }

    let outcome = board.toggle(id).await;
    ensure_applied(&board, outcome)?;

    if outcome == Outcome::Applied {
        if let Some(todo) = board.todos().iter().find(|todo| todo.id == id) {
            msg_success!(Message::TodoToggled(id.get(), todo.completed));
        }
    }
    print_summary(&board);

    Ok(())
}
