//! Default value functions for the Config struct.

/// Default allowed level codes (CEFR proficiency levels).
pub fn default_allowed_levels() -> Vec<String> {
    ["A1", "A2", "B1", "B2", "C1", "C2"]
        .into_iter()
        .map(String::from)
        .collect()
}

/// Default prefixes of lines that are skipped without validation.
pub fn default_skip_prefixes() -> Vec<String> {
    vec!["--".to_string(), "SET".to_string()]
}

// Default value functions for serde
pub(crate) fn default_expected_columns() -> usize {
    6
}
pub(crate) fn default_level_column() -> usize {
    5
}
