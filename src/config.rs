//! Sizer Configuration
//!
//! Tunables for the capacity engine, loadable from YAML. Every field has a
//! default so a partial file only overrides what it names.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

/// Default ceiling on chassis per cluster
pub const DEFAULT_MAX_CHASSIS: u32 = 250;

/// Guaranteed compression/dedup gain applied to usable capacity
pub const DEFAULT_DATA_REDUCTION_RATIO: f64 = 1.30;

/// Configuration for the capacity engine
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SizerConfig {
    /// Largest chassis count accepted in a request
    pub max_chassis: u32,
    /// Multiplier from usable to effective capacity
    pub data_reduction_ratio: f64,
}

impl Default for SizerConfig {
    fn default() -> Self {
        Self {
            max_chassis: DEFAULT_MAX_CHASSIS,
            data_reduction_ratio: DEFAULT_DATA_REDUCTION_RATIO,
        }
    }
}

impl SizerConfig {
    /// Parse and validate a YAML document
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: SizerConfig = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a YAML config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!(path = %path.display(), "Loading sizer config");
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Check the config is usable by the engine
    pub fn validate(&self) -> Result<()> {
        if self.max_chassis == 0 {
            return Err(Error::Configuration(
                "maxChassis must be at least 1".to_string(),
            ));
        }

        if !self.data_reduction_ratio.is_finite() || self.data_reduction_ratio <= 0.0 {
            return Err(Error::Configuration(format!(
                "dataReductionRatio must be a positive number, got {}",
                self.data_reduction_ratio
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = SizerConfig::default();
        assert_eq!(config.max_chassis, 250);
        assert_eq!(config.data_reduction_ratio, 1.30);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let config = SizerConfig::from_yaml_str("maxChassis: 64\n").unwrap();
        assert_eq!(config.max_chassis, 64);
        assert_eq!(config.data_reduction_ratio, DEFAULT_DATA_REDUCTION_RATIO);
    }

    #[test]
    fn test_invalid_values_rejected() {
        assert_matches!(
            SizerConfig::from_yaml_str("maxChassis: 0\n"),
            Err(Error::Configuration(_))
        );
        assert_matches!(
            SizerConfig::from_yaml_str("dataReductionRatio: -1.0\n"),
            Err(Error::Configuration(_))
        );
        assert_matches!(
            SizerConfig::from_yaml_str("maxChassis: lots\n"),
            Err(Error::YamlParse(_))
        );
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "maxChassis: 32").unwrap();
        writeln!(file, "dataReductionRatio: 1.5").unwrap();

        let config = SizerConfig::load(file.path()).unwrap();
        assert_eq!(config.max_chassis, 32);
        assert_eq!(config.data_reduction_ratio, 1.5);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::TempDir::new().unwrap();
        assert_matches!(
            SizerConfig::load(dir.path().join("missing.yaml")),
            Err(Error::Io(_))
        );
    }
}
