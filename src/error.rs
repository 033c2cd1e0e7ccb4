//! Error types for the faculty network pipeline
//!
//! Only structural failures surface here. Bad field values and failed
//! similarity scores degrade to defaults and never become a `NetworkError`.

use std::path::PathBuf;
use thiserror::Error;

/// Fatal errors raised while reading the roster, loading configuration or
/// writing the network document
#[derive(Error, Debug)]
pub enum NetworkError {
    #[error("Cannot open {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed roster CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Config parse error: {0}")]
    ConfigParse(#[from] serde_yaml::Error),

    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type NetworkResult<T> = Result<T, NetworkError>;
