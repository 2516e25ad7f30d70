//! Configuration management for `Consigna`.
//!
//! Configuration is deliberately small: the only tunable is where the JSON
//! collections live. Resolution order is the `CONSIGNA_DATA_DIR` environment
//! variable, then an optional `config.toml`, then the `data/` default.

/// Storage location configuration from config.toml and the environment
pub mod storage;

use crate::errors::Result;
use std::path::PathBuf;
use tracing::debug;

/// Fully resolved application configuration.
#[derive(Debug)]
pub struct AppConfig {
    /// Directory holding the persisted collection documents
    pub data_dir: PathBuf,
}

/// Loads the application configuration: reads `config.toml` when present,
/// then applies the environment override.
///
/// A missing config file is fine; a malformed one is an error.
pub fn load_app_configuration() -> Result<AppConfig> {
    let file = storage::load_optional_config(storage::DEFAULT_CONFIG_PATH)?;
    let env_dir = std::env::var_os(storage::DATA_DIR_ENV).map(PathBuf::from);

    let data_dir = storage::resolve_data_dir(env_dir, &file);
    debug!("Using data directory {}", data_dir.display());

    Ok(AppConfig { data_dir })
}
