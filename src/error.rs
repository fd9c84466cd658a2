//! Error types for the rowlint CLI.
//!
//! Uses thiserror for derive macros and provides user-actionable error messages.
//! Findings in the scanned file are not errors; see `validate::Finding`.

use crate::exit_codes;
use thiserror::Error;

/// Main error type for rowlint operations.
#[derive(Error, Debug)]
pub enum RowlintError {
    /// User provided invalid arguments or an unreadable source file.
    #[error("{0}")]
    UserError(String),

    /// Config file could not be read, parsed, or validated.
    #[error("Invalid configuration: {0}")]
    ConfigError(String),
}

impl RowlintError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            RowlintError::UserError(_) => exit_codes::USER_ERROR,
            RowlintError::ConfigError(_) => exit_codes::CONFIG_ERROR,
        }
    }
}

/// Result type alias for rowlint operations.
pub type Result<T> = std::result::Result<T, RowlintError>;
