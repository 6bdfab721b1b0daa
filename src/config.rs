//! Lineage configuration
//!
//! Loaded from YAML; every field has a default so a partial file is valid.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Reading the config file failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Config file is not valid YAML for this schema
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

pub type ConfigResult<T> = Result<T, ConfigError>;

/// Lineage configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LineageConfig {
    /// Individual all distances are measured from
    pub source: String,
    /// Parent value in family records that means "no known parent"
    pub unknown_marker: String,
}

impl Default for LineageConfig {
    fn default() -> Self {
        Self {
            source: "Bob".to_string(),
            unknown_marker: "Unknown".to_string(),
        }
    }
}

impl LineageConfig {
    pub fn from_yaml_str(yaml: &str) -> ConfigResult<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    pub fn from_file(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = LineageConfig::default();
        assert_eq!(config.source, "Bob");
        assert_eq!(config.unknown_marker, "Unknown");
    }

    #[test]
    fn test_partial_yaml() {
        let config = LineageConfig::from_yaml_str("source: Eve\n").unwrap();
        assert_eq!(config.source, "Eve");
        assert_eq!(config.unknown_marker, "Unknown");
    }

    #[test]
    fn test_invalid_yaml() {
        let err = LineageConfig::from_yaml_str("source: [unclosed").unwrap_err();
        assert!(matches!(err, ConfigError::Yaml(_)));
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "source: Carol").unwrap();
        writeln!(file, "unknown_marker: \"?\"").unwrap();

        let config = LineageConfig::from_file(file.path()).unwrap();
        assert_eq!(config.source, "Carol");
        assert_eq!(config.unknown_marker, "?");
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = LineageConfig::from_file(dir.path().join("absent.yaml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
