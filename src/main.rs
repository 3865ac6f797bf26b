use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use sensorhub::{Config, ReadingStore, SqliteStore};

#[derive(Parser)]
#[command(name = "sensorhub", about = "Sensorhub — IoT reading ingestion and storage service")]
struct Cli {
    /// Extra TOML config file layered over the built-in defaults.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Listen port (overrides config and $PORT).
    #[arg(long)]
    port: Option<u16>,

    /// SQLite database file (overrides config).
    #[arg(long)]
    db: Option<PathBuf>,

    /// Log at debug level unless RUST_LOG says otherwise.
    #[arg(long)]
    debug: bool,

    /// Append logs to this file instead of stderr (tail -f to inspect).
    #[arg(long)]
    log_file: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli)?;

    let mut config = Config::load(cli.config.as_deref())?;
    if let Some(port) = cli.port {
        config.server.port = port;
    }
    if let Some(db) = cli.db {
        config.storage.path = db;
    }

    let store: Arc<dyn ReadingStore> = Arc::new(SqliteStore::open(&config.storage.path)?);
    tracing::info!("database file: {}", config.storage.path.display());

    sensorhub::run(store, &config, sensorhub::shutdown_signal()).await
}

fn init_tracing(cli: &Cli) -> anyhow::Result<()> {
    let default_level = if cli.debug { "debug" } else { "info" };
    let filter = tracing_subscriber::EnvFilter::try_from_env("RUST_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level));

    match &cli.log_file {
        Some(path) => {
            let file = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)?;
            tracing_subscriber::fmt()
                .with_writer(std::sync::Mutex::new(file))
                .with_ansi(false)
                .with_env_filter(filter)
                .init();
        }
        None => tracing_subscriber::fmt().with_env_filter(filter).init(),
    }
    Ok(())
}
