use std::path::PathBuf;

use thiserror::Error;

/// Custom error types for suggestfield
#[derive(Debug, Error)]
pub enum SuggestFieldError {
    #[error("Could not read config file {}: {source}", path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid TOML in config file {}: {source}", path.display())]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod error_tests;
