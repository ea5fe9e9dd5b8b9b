//! Configuration error types.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid log level: '{0}'. Valid levels: off, error, warn, info, debug, trace")]
    InvalidLogLevel(String),

    #[error("Invalid console key '{0}': keys must be a single non-empty word")]
    InvalidKey(String),
}
