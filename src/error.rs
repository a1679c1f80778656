use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LevelCtlError {
    #[error("Failed to load configuration: {0}")]
    Config(String),

    #[error("Failed to bind to address {address}: {source}")]
    Bind {
        address: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Server error: {0}")]
    Server(#[from] std::io::Error),
}

/// Failures raised by the logger store accessor.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("unknown logger {0}")]
    UnknownLogger(String),

    #[error("failed to read log config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to rewrite log config {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Failures raised while applying persisted levels to the running subscriber.
#[derive(Error, Debug)]
pub enum ReloadError {
    #[error("failed to build logging filter: {0}")]
    Filter(String),

    #[error("failed to swap logging filter: {0}")]
    Swap(String),
}
