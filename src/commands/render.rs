use super::open_board;
use anyhow::Result;
use clap::Args;
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct RenderArgs {
    /// Write the markup to a file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,
}

pub async fn cmd(render_args: RenderArgs) -> Result<()> {
    let board = open_board().await?;
    let html = board.render_html();

    match render_args.output {
        Some(path) => fs::write(path, html)?,
        None => print!("{}", html),
    }

    Ok(())
}
