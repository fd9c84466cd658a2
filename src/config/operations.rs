//! Config loading, validation, and utility operations.

use super::model::Config;
use crate::error::{Result, RowlintError};
use std::path::Path;
use tracing::debug;

impl Config {
    /// Load config from a YAML file.
    ///
    /// Unknown fields in the YAML are silently ignored for forward compatibility.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the YAML config file
    ///
    /// # Returns
    ///
    /// * `Ok(Config)` - Successfully loaded and validated config
    /// * `Err(RowlintError::ConfigError)` - Read error, parse error, or validation failure
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            RowlintError::ConfigError(format!(
                "failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        let config = Self::from_yaml(&content)?;
        debug!(path = %path.display(), ?config, "loaded config");
        Ok(config)
    }

    /// Load config from `path` if given, otherwise use defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    /// Parse config from a YAML string.
    ///
    /// Unknown fields in the YAML are silently ignored for forward compatibility.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: Config = serde_yaml::from_str(yaml)
            .map_err(|e| RowlintError::ConfigError(format!("failed to parse config YAML: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Serialize config to YAML string.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).map_err(|e| {
            RowlintError::ConfigError(format!("failed to serialize config to YAML: {}", e))
        })
    }

    /// Validate config values and return error on invalid values.
    ///
    /// Validation rules:
    /// - `expected_columns` must be positive
    /// - `level_column` must be a valid index into a row of `expected_columns`
    /// - `allowed_levels` must be non-empty and contain no empty entries
    /// - `skip_prefixes` entries must be non-empty
    pub fn validate(&self) -> Result<()> {
        if self.expected_columns == 0 {
            return Err(RowlintError::ConfigError(
                "config validation failed: expected_columns must be greater than 0".to_string(),
            ));
        }

        if self.level_column >= self.expected_columns {
            return Err(RowlintError::ConfigError(format!(
                "config validation failed: level_column ({}) must be less than expected_columns ({})",
                self.level_column, self.expected_columns
            )));
        }

        if self.allowed_levels.is_empty() {
            return Err(RowlintError::ConfigError(
                "config validation failed: allowed_levels must not be empty".to_string(),
            ));
        }

        if self.allowed_levels.iter().any(|level| level.trim().is_empty()) {
            return Err(RowlintError::ConfigError(
                "config validation failed: allowed_levels entries must be non-empty".to_string(),
            ));
        }

        if self.skip_prefixes.iter().any(|prefix| prefix.is_empty()) {
            return Err(RowlintError::ConfigError(
                "config validation failed: skip_prefixes entries must be non-empty \
                 (an empty prefix would skip every line)"
                    .to_string(),
            ));
        }

        Ok(())
    }
}
