//! Command implementations for rowlint.
//!
//! This module provides the dispatcher that routes CLI commands to their
//! implementations.

mod check;
mod config_cmd;
mod tokenize;

use crate::cli::Command;
use crate::error::{Result, RowlintError};

pub use check::cmd_check;
pub use config_cmd::cmd_config;
pub use tokenize::cmd_tokenize;

/// Dispatch a command to its implementation.
///
/// This is the main entry point for command execution. Each command
/// is routed to its handler function.
pub fn dispatch(command: Command) -> Result<()> {
    match command {
        Command::Check(args) => cmd_check(args),
        Command::Tokenize(args) => cmd_tokenize(args),
        Command::Config(args) => cmd_config(args),
    }
}

/// Map a failed write to the output stream into a user-facing error.
pub(crate) fn output_error(e: std::io::Error) -> RowlintError {
    RowlintError::UserError(format!("failed to write output: {}", e))
}
