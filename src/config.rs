//! Configuration file: which base commands may be run.
//!
//! ```toml
//! enable_commands = ["grep", "sort", "sed"]
//! ```

use crate::pipeline::AllowList;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Environment variable naming the configuration file.
pub const ENV_TXTMANIP_CONFIG: &str = "TXTMANIP_CONFIG";
/// Configuration file used when none is named.
pub const DEFAULT_CONFIG_PATH: &str = "txtmanip.toml";

/// Errors while loading the configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file could not be read.
    #[error("{}: {source}", path.display())]
    Read {
        /// Configuration file.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },

    /// The file is not valid TOML for this schema.
    #[error("{}: {source}", path.display())]
    Parse {
        /// Configuration file.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: toml::de::Error,
    },
}

/// Contents of the configuration file.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Config {
    /// Base command names that may be executed.
    #[serde(default)]
    pub enable_commands: Vec<String>,
}

impl Config {
    /// Parse configuration text. `path` is only used in errors.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed TOML or wrongly typed keys.
    pub fn parse(raw: &str, path: &Path) -> Result<Self, ConfigError> {
        toml::from_str(raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Read and parse the file at `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file is unreadable or malformed.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::parse(&raw, path)?;
        tracing::debug!(
            target: "session",
            path = %path.display(),
            commands = config.enable_commands.len(),
            "config_loaded"
        );
        Ok(config)
    }

    /// The permitted commands as an allow-list.
    pub fn allow_list(&self) -> AllowList {
        AllowList::new(self.enable_commands.iter().map(String::as_str))
    }
}
