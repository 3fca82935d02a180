use super::{ensure_applied, open_board, print_summary};
use crate::libs::board::Outcome;
use crate::libs::messages::Message;
use crate::libs::todo::TodoId;
use crate::{msg_info, msg_success};
use anyhow::Result;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Confirm};

#[derive(Debug, Args)]
pub struct DeleteArgs {
    /// Task ID
    id: TodoId,

    /// Skip the confirmation prompt
    #[arg(short, long)]
    yes: bool,
}

pub async fn cmd(delete_args: DeleteArgs) -> Result<()> {
    let mut board = open_board().await?;
    let id = delete_args.id;

    let confirm = |prompt: &str| {
        delete_args.yes
            || Confirm::with_theme(&ColorfulTheme::default())
                .with_prompt(prompt)
                .default(false)
                .interact()
                .unwrap_or(false)
    };

    let outcome = board.delete(id, &confirm).await;
    ensure_applied(&board, outcome)?;

    match outcome {
        Outcome::Cancelled => msg_info!(Message::OperationCancelled),
        _ => {
            msg_success!(Message::TodoRemoved(id.get()));
            print_summary(&board);
        }
    }

    Ok(())
}
