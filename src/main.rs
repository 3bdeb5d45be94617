//! FolderTree Server: hierarchical folder and file namespace over HTTP.
//!
//! Main entry point that loads configuration, initializes logging and
//! hands off to the API crate.

use tracing_subscriber::{EnvFilter, fmt};

use foldertree_core::config::AppConfig;
use foldertree_core::error::AppError;

#[tokio::main]
async fn main() {
    let config = match load_configuration() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = run(config).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}

/// Load configuration from `config/` and the environment.
///
/// `FOLDERTREE_CONFIG` points at a single file and bypasses the layered
/// lookup; otherwise `config/default.toml` is merged with
/// `config/{FOLDERTREE_ENV}.toml`.
fn load_configuration() -> Result<AppConfig, AppError> {
    if let Ok(path) = std::env::var("FOLDERTREE_CONFIG") {
        return AppConfig::load_from(&path);
    }

    let env = std::env::var("FOLDERTREE_ENV").unwrap_or_else(|_| "development".to_string());
    AppConfig::load(&env)
}

/// Initialize tracing/logging
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .with_thread_ids(true)
                .init();
        }
        _ => {
            fmt()
                .pretty()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
    }
}

/// Main server run function
async fn run(config: AppConfig) -> Result<(), AppError> {
    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        provider = %config.store.provider,
        "Starting FolderTree"
    );
    foldertree_api::run_server(config).await
}
