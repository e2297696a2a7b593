//! Configuration source errors
//!
//! Failures while obtaining a configuration (I/O, malformed JSON). These
//! are distinct from admission failures: a configuration that cannot be
//! parsed never reaches the validator.

use std::path::PathBuf;

use thiserror::Error;

/// Result type for configuration loading
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Errors produced while reading or parsing a configuration source
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("failed to read replicate configuration '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The configuration payload is not valid JSON for the wire shape.
    #[error("malformed replicate configuration: {0}")]
    Parse(#[from] serde_json::Error),
}
