// src/error.rs

use std::io;
use std::path::PathBuf;

/// Terminal failure while loading a session log.
/// Malformed rows never surface here; they are skipped by the parser.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("cannot read log file '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Failure while loading an analysis config file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("cannot read config file '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid config file '{}': {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid config value: {0}")]
    Invalid(String),
}

// src/error.rs
