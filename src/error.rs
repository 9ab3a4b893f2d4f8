//! Error types for start-up concerns.
//!
//! Navigation itself never fails; only loading configuration, loading the
//! catalog and driving the terminal can.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Catalog loading and validation errors
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("failed to read catalog {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid catalog JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("duplicate {kind} id `{id}`")]
    Duplicate { kind: &'static str, id: String },

    #[error("catalog has no {0}")]
    Empty(&'static str),

    #[error("level `{0}` offers no durations")]
    NoDurations(String),

    #[error("home menu has no entry for the {0} screen")]
    MissingTarget(String),

    #[error("schedule shows {completed} of {total} days completed")]
    DaysOutOfRange { completed: u8, total: u8 },
}

/// Configuration file errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Top-level application errors
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Terminal error: {0}")]
    Terminal(#[from] io::Error),

    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("failed to open log file {path}: {source}")]
    Log {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
