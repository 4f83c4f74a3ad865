//! User configuration
//!
//! Optional preferences for the command-line front end, stored at
//! `~/.config/docval/config.toml`:
//!
//! ```toml
//! default_type = "rnc"
//!
//! [output]
//! json = false
//! color = true
//! ```
//!
//! Validation itself never reads configuration.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::models::DocumentType;
use crate::paths;

/// Errors raised while loading or saving the config file
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file exists but could not be read or written
    #[error("config file {path}: {source}")]
    Io {
        /// Path of the config file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The file is not valid TOML or has unexpected values
    #[error("invalid config file {path}: {source}")]
    Parse {
        /// Path of the config file
        path: PathBuf,
        /// Underlying TOML error
        #[source]
        source: toml::de::Error,
    },

    /// The config could not be serialized
    #[error("could not serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Global docval configuration
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GlobalConfig {
    /// Document type assumed by `batch` when lines carry no type
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_type: Option<DocumentType>,
    /// Output preferences
    #[serde(default)]
    pub output: OutputConfig,
}

/// Output preferences
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Emit JSON even without `--json`
    #[serde(default)]
    pub json: bool,
    /// Colorize human-readable output
    #[serde(default = "default_color")]
    pub color: bool,
}

const fn default_color() -> bool {
    true
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            json: false,
            color: default_color(),
        }
    }
}

impl GlobalConfig {
    /// Get the config file path
    #[must_use]
    pub fn config_path() -> PathBuf {
        paths::global_config()
    }

    /// Load config from the default location
    ///
    /// A missing file yields the default configuration.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path())
    }

    /// Load config from an explicit path
    ///
    /// A missing file yields the default configuration.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            log::debug!("no config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let config = toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        log::debug!("loaded config from {}", path.display());
        Ok(config)
    }

    /// Save config to an explicit path, creating parent directories
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        let io_err = |source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        };

        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir).map_err(io_err)?;
        }

        let content = toml::to_string_pretty(self)?;
        fs::write(path, content).map_err(io_err)
    }
}
