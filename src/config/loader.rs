//! Configuration source loading
//!
//! Parses a `ReplicateConfiguration` from JSON, either in-memory or from
//! a file. No semantic checks happen here; admission is the validator's
//! job.

use std::fs;
use std::path::Path;

use super::errors::{ConfigError, ConfigResult};
use super::types::ReplicateConfiguration;

/// Parses a configuration from a JSON string.
pub fn from_json_str(payload: &str) -> ConfigResult<ReplicateConfiguration> {
    Ok(serde_json::from_str(payload)?)
}

/// Reads and parses a configuration from a JSON file.
pub fn from_json_file(path: &Path) -> ConfigResult<ReplicateConfiguration> {
    let payload = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    from_json_str(&payload)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_minimal_configuration() {
        let config = from_json_str(r#"{"clusters": [], "cross_cluster_topology": []}"#).unwrap();
        assert!(config.clusters.is_empty());
        assert!(config.cross_cluster_topology.is_empty());
    }

    #[test]
    fn test_absent_lists_default_to_empty() {
        let config = from_json_str("{}").unwrap();
        assert!(config.clusters.is_empty());
        assert!(config.cross_cluster_topology.is_empty());
    }

    #[test]
    fn test_malformed_json_is_a_parse_error() {
        let err = from_json_str("{not json").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_missing_file_is_an_io_error() {
        let err = from_json_file(Path::new("/nonexistent/replicate.json")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
