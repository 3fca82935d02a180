use crate::libs::config::Config;
use crate::server::{self, store::Store, AppState};
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;
use tokio::net::TcpListener;

#[derive(Debug, Args)]
pub struct ServeArgs {
    /// Interface to bind, overriding configuration
    #[arg(long)]
    host: Option<String>,

    /// Port to listen on, overriding configuration
    #[arg(short, long)]
    port: Option<u16>,

    /// SQLite database file, overriding configuration
    #[arg(short, long)]
    database: Option<PathBuf>,
}

pub async fn cmd(serve_args: ServeArgs) -> Result<()> {
    let mut config = Config::read()?.server();
    if let Some(host) = serve_args.host {
        config.host = host;
    }
    if let Some(port) = serve_args.port {
        config.port = port;
    }
    if let Some(database) = serve_args.database {
        config.database = Some(database);
    }

    let store = Store::open(config.database_path()?)?;
    let listener = TcpListener::bind(config.address()).await?;

    server::run(listener, AppState::new(store), server::shutdown_signal()).await
}
