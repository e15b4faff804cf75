use std::fs;
use std::path::{Path, PathBuf};

use directories::BaseDirs;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::store::STORE_FILE_NAME;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TripdeckConfig {
    pub version: u32,
    #[serde(default)]
    pub store: StoreConfig,
    #[serde(default)]
    pub selection: SelectionConfig,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct StoreConfig {
    pub path: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct SelectionConfig {
    /// When set, a failed batch delete keeps the selection for a retry
    /// instead of dropping back to browsing.
    #[serde(default)]
    pub keep_selection_on_failed_delete: bool,
}

impl TripdeckConfig {
    /// Store path from config, or `trips.toml` next to the config file.
    pub fn store_path(&self, config_path: &Path) -> PathBuf {
        if let Some(path) = &self.store.path {
            return path.clone();
        }

        config_path
            .parent()
            .map(|dir| dir.join(STORE_FILE_NAME))
            .unwrap_or_else(|| PathBuf::from(STORE_FILE_NAME))
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not resolve home directory for config path")]
    HomeDirectoryUnavailable,
    #[error("failed to read config at {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config at {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("invalid config: {message}")]
    Validation { message: String },
}

pub fn resolve_config_dir() -> anyhow::Result<PathBuf> {
    let base_dirs = BaseDirs::new().ok_or(ConfigError::HomeDirectoryUnavailable)?;
    Ok(base_dirs.home_dir().join(".config").join("tripdeck"))
}

pub fn resolve_config_path() -> anyhow::Result<PathBuf> {
    Ok(resolve_config_dir()?.join("config.toml"))
}

pub fn load_config(path: &Path) -> Result<TripdeckConfig, ConfigError> {
    let raw = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let parsed: TripdeckConfig = toml::from_str(&raw).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    validate_config(&parsed)?;
    Ok(parsed)
}

pub fn validate_config(config: &TripdeckConfig) -> Result<(), ConfigError> {
    if config.version != 1 {
        return Err(ConfigError::Validation {
            message: "version must be 1".to_string(),
        });
    }

    if let Some(path) = &config.store.path {
        if path.as_os_str().is_empty() {
            return Err(ConfigError::Validation {
                message: "store.path must be non-empty when set".to_string(),
            });
        }

        if path.is_dir() {
            return Err(ConfigError::Validation {
                message: format!(
                    "store.path must point to a file, found directory {}",
                    path.display()
                ),
            });
        }
    }

    Ok(())
}
