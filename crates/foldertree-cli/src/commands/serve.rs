//! Server start command.

use clap::Args;

use foldertree_core::config::StoreProvider;
use foldertree_core::error::AppError;

/// Arguments for the serve command
#[derive(Debug, Args)]
pub struct ServeArgs {
    /// Override bind host
    #[arg(long)]
    pub host: Option<String>,
    /// Override bind port
    #[arg(short, long)]
    pub port: Option<u16>,
    /// Serve from the in-memory store instead of PostgreSQL
    #[arg(long)]
    pub memory: bool,
}

/// Execute the serve command
pub async fn execute(args: &ServeArgs, config_path: &str) -> Result<(), AppError> {
    let mut config = super::load_config(config_path)?;

    if let Some(host) = &args.host {
        config.server.host = host.clone();
    }
    if let Some(port) = args.port {
        config.server.port = port;
    }
    if args.memory {
        config.store.provider = StoreProvider::Memory;
    }

    println!("Starting FolderTree server on {}", config.server.bind_address());
    foldertree_api::run_server(config).await
}
