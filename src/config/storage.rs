//! Storage location configuration.
//!
//! This module owns the `config.toml` shape and the precedence rule for
//! picking the data directory: environment variable over config file over
//! built-in default. The resolution itself is a pure function so the
//! precedence is testable without touching process state.

use crate::errors::{Error, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Environment variable overriding the data directory.
pub const DATA_DIR_ENV: &str = "CONSIGNA_DATA_DIR";

/// Default location of the configuration file.
pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

/// Data directory used when neither the environment nor the config file
/// names one.
const DEFAULT_DATA_DIR: &str = "data";

/// Configuration structure representing the entire config.toml file.
#[derive(Debug, Default, Deserialize)]
pub struct ConfigFile {
    /// Storage settings section
    #[serde(default)]
    pub storage: StorageConfig,
}

/// The `[storage]` section of config.toml.
#[derive(Debug, Default, Deserialize)]
pub struct StorageConfig {
    /// Directory holding the persisted collection documents
    pub data_dir: Option<PathBuf>,
}

/// Loads configuration from a TOML file.
///
/// # Errors
/// Returns an error if the file cannot be read or the TOML is invalid.
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<ConfigFile> {
    let contents = std::fs::read_to_string(path.as_ref()).map_err(|e| Error::Config {
        message: format!("Failed to read config file: {e}"),
    })?;

    toml::from_str(&contents).map_err(|e| Error::Config {
        message: format!("Failed to parse config.toml: {e}"),
    })
}

/// Loads configuration from a TOML file that may not exist; a missing file
/// yields the default configuration.
///
/// # Errors
/// Returns an error only when the file exists but cannot be read or parsed.
pub fn load_optional_config<P: AsRef<Path>>(path: P) -> Result<ConfigFile> {
    if path.as_ref().exists() {
        load_config(path)
    } else {
        Ok(ConfigFile::default())
    }
}

/// Applies the precedence rule: environment override, then the config file,
/// then the built-in default.
#[must_use]
pub fn resolve_data_dir(env_dir: Option<PathBuf>, file: &ConfigFile) -> PathBuf {
    env_dir
        .or_else(|| file.storage.data_dir.clone())
        .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_DIR))
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;

    #[test]
    fn test_parse_storage_config() {
        let toml_str = r#"
            [storage]
            data_dir = "/var/lib/consigna"
        "#;

        let config: ConfigFile = toml::from_str(toml_str).unwrap();
        assert_eq!(
            config.storage.data_dir,
            Some(PathBuf::from("/var/lib/consigna"))
        );
    }

    #[test]
    fn test_empty_config_file_is_valid() {
        let config: ConfigFile = toml::from_str("").unwrap();
        assert!(config.storage.data_dir.is_none());
    }

    #[test]
    fn test_resolve_precedence_env_wins() {
        let file = ConfigFile {
            storage: StorageConfig {
                data_dir: Some(PathBuf::from("from-file")),
            },
        };

        let resolved = resolve_data_dir(Some(PathBuf::from("from-env")), &file);
        assert_eq!(resolved, PathBuf::from("from-env"));
    }

    #[test]
    fn test_resolve_precedence_file_over_default() {
        let file = ConfigFile {
            storage: StorageConfig {
                data_dir: Some(PathBuf::from("from-file")),
            },
        };

        assert_eq!(resolve_data_dir(None, &file), PathBuf::from("from-file"));
        assert_eq!(
            resolve_data_dir(None, &ConfigFile::default()),
            PathBuf::from(DEFAULT_DATA_DIR)
        );
    }

    #[test]
    fn test_load_optional_config_missing_file() {
        let config = load_optional_config("definitely/not/a/config.toml").unwrap();
        assert!(config.storage.data_dir.is_none());
    }

    #[test]
    fn test_load_config_rejects_malformed_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[storage\ndata_dir = ").unwrap();

        let result = load_config(&path);
        assert!(matches!(result, Err(Error::Config { .. })));
    }
}
