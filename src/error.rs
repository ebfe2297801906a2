//! Error types for pair and symbol normalization
//!
//! Unparseable input is not an error: the normalizers report it as `None`.
//! These enums cover caller mistakes and configuration problems only.

use std::path::PathBuf;

use thiserror::Error;

/// Errors returned by the normalization entry points
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NormalizeError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Malformed canonical pair: {pair}")]
    MalformedPair { pair: String },
}

impl NormalizeError {
    pub(crate) fn empty_exchange() -> Self {
        NormalizeError::InvalidArgument("The exchange name must NOT be empty".to_string())
    }
}

/// Configuration loading errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config: {0}")]
    Yaml(#[from] serde_yaml::Error),
}
