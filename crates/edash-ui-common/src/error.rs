//! Error types for dashboard services.

use std::path::PathBuf;
use thiserror::Error;

/// Result type for dashboard service operations.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// The raw table could not be read.
    #[error("failed to load table from {path}: {source}")]
    LoadFailed {
        path: PathBuf,
        #[source]
        source: anyhow::Error,
    },

    /// The energy pipeline rejected the table.
    #[error("energy analysis failed: {0}")]
    Energy(#[from] edash_energy::Error),

    /// Building an output table failed.
    #[error("table output failed: {0}")]
    Table(String),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(String),
}

impl From<toml::de::Error> for Error {
    fn from(e: toml::de::Error) -> Self {
        Error::Serialization(e.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(e: toml::ser::Error) -> Self {
        Error::Serialization(e.to_string())
    }
}
