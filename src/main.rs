//! `Consigna` binary - wires configuration, storage, and the CLI together.

use clap::Parser;
use consigna::{
    cli,
    config,
    errors::Result,
    storage::JsonFileStorage,
    store::EntityStore,
};
use dotenvy::dotenv;
use tracing::error;
use tracing_subscriber::EnvFilter;

fn main() {
    // 1. Initialize tracing (as early as possible)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // 2. Load .env file; env vars can also be set externally
    dotenv().ok();

    let cli = cli::Cli::parse();

    if let Err(e) = run(cli) {
        error!("Command failed: {e}");
        std::process::exit(1);
    }
}

fn run(cli: cli::Cli) -> Result<()> {
    let app_config = config::load_app_configuration()?;

    let storage = JsonFileStorage::new(&app_config.data_dir);
    let mut store = EntityStore::open(Box::new(storage));

    cli::run(cli, &mut store)
}
