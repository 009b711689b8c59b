//! Worker configuration
//!
//! Configuration can be built in code or loaded from YAML (JSON is accepted
//! too, being a subset of YAML):
//!
//! ```yaml
//! name: bucket-listing
//! log_progress: false
//! ```

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Configuration for a batch worker
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkerConfig {
    /// Name recorded on the tracing span of each run
    #[serde(default = "default_name")]
    pub name: String,

    /// Whether to emit a debug event after every batch
    #[serde(default = "default_log_progress")]
    pub log_progress: bool,
}

fn default_name() -> String {
    "batch-worker".to_string()
}

fn default_log_progress() -> bool {
    true
}

impl Default for WorkerConfig {
    fn default() -> Self {
        Self {
            name: default_name(),
            log_progress: default_log_progress(),
        }
    }
}

impl WorkerConfig {
    /// Create a new worker config
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the worker name
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Enable or disable per-batch progress events
    #[must_use]
    pub fn with_log_progress(mut self, log_progress: bool) -> Self {
        self.log_progress = log_progress;
        self
    }

    /// Parse a config from a YAML string
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a config from a YAML or JSON file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(Error::config("worker name must not be empty"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;

    #[test]
    fn test_config_default() {
        let config = WorkerConfig::default();
        assert_eq!(config.name, "batch-worker");
        assert!(config.log_progress);
    }

    #[test]
    fn test_config_builder() {
        let config = WorkerConfig::new()
            .with_name("s3-listing")
            .with_log_progress(false);

        assert_eq!(config.name, "s3-listing");
        assert!(!config.log_progress);
    }

    #[test]
    fn test_config_from_yaml() {
        let config = WorkerConfig::from_yaml_str("name: change-feed\nlog_progress: false\n").unwrap();
        assert_eq!(
            config,
            WorkerConfig {
                name: "change-feed".to_string(),
                log_progress: false,
            }
        );
    }

    #[test]
    fn test_config_yaml_defaults() {
        let config = WorkerConfig::from_yaml_str("{}").unwrap();
        assert_eq!(config, WorkerConfig::default());
    }

    #[test]
    fn test_config_accepts_json() {
        let config = WorkerConfig::from_yaml_str(r#"{"name": "search"}"#).unwrap();
        assert_eq!(config.name, "search");
        assert!(config.log_progress);
    }

    #[test]
    fn test_config_rejects_empty_name() {
        let err = WorkerConfig::from_yaml_str("name: '  '").unwrap_err();
        assert!(matches!(err, Error::Config { .. }));
    }

    #[test]
    fn test_config_rejects_bad_yaml() {
        let err = WorkerConfig::from_yaml_str("log_progress: [not, a, bool]").unwrap_err();
        assert!(matches!(err, Error::YamlParse(_)));
    }

    #[test]
    fn test_config_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "name: from-file").unwrap();

        let config = WorkerConfig::from_file(file.path()).unwrap();
        assert_eq!(config.name, "from-file");
    }

    #[test]
    fn test_config_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = WorkerConfig::from_file(dir.path().join("missing.yaml")).unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }
}
