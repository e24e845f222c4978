//! navstate - Headless shell for the interview-prep navigation state store
//!
//! Reads commands from stdin, dispatches them to the store and prints the
//! resulting shell chrome. Session storage lives in SQLite unless configured
//! to stay in memory.

use std::io;

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use navstate::core::AppStateStore;
use navstate::persistence::{MemoryStorage, SessionStorage, SqliteStorage};
use navstate::shell::{Shell, ShellConfig};
use navstate::{APP_NAME, APP_VERSION};

fn main() -> Result<()> {
    let config = ShellConfig::load().context("Failed to load configuration")?;

    // Initialize logging
    init_logging(&config);

    info!("{} v{} starting...", APP_NAME, APP_VERSION);

    let storage: Box<dyn SessionStorage> = if config.in_memory {
        info!("Using in-memory session storage");
        Box::new(MemoryStorage::new())
    } else {
        let path = config.database_path();
        let storage = SqliteStorage::open(&path, config.resume_session)
            .context(format!("Failed to open session storage at {:?}", path))?;
        Box::new(storage)
    };

    let store = AppStateStore::with_key(storage, config.storage_key.clone());
    info!("Application state initialized");

    let mut shell = Shell::new(store);
    let stdin = io::stdin();
    let stdout = io::stdout();
    shell.run(stdin.lock(), stdout.lock())?;

    info!("{} shutting down", APP_NAME);
    Ok(())
}

/// Initialize the logging system
fn init_logging(config: &ShellConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_filter()));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}
