//! Config struct definition and default implementation.

use super::types::*;
use serde::{Deserialize, Serialize};

/// Configuration for a rowlint scan.
///
/// Usually loaded from a YAML file passed with `--config`. Unknown fields
/// in the YAML are ignored for forward compatibility.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    // =========================================================================
    // Row layout
    // =========================================================================
    /// Number of values each row must have (default: 6).
    #[serde(default = "default_expected_columns")]
    pub expected_columns: usize,

    /// Zero-based index of the level column (default: 5).
    #[serde(default = "default_level_column")]
    pub level_column: usize,

    /// Level codes accepted in the level column (case-sensitive).
    #[serde(default = "default_allowed_levels")]
    pub allowed_levels: Vec<String>,

    // =========================================================================
    // Line classification
    // =========================================================================
    /// Trimmed lines starting with any of these are skipped.
    /// Blank lines are always skipped.
    #[serde(default = "default_skip_prefixes")]
    pub skip_prefixes: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            expected_columns: default_expected_columns(),
            level_column: default_level_column(),
            allowed_levels: default_allowed_levels(),
            skip_prefixes: default_skip_prefixes(),
        }
    }
}
