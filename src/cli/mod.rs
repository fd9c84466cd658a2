//! CLI argument parsing for rowlint.
//!
//! Uses clap derive macros for declarative argument definitions.
//! This module defines the command structure; actual implementations
//! are in the `commands` module.

use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Rowlint: structural checker for idiom-dataset SQL insert files.
///
/// Every line that is not blank, a `--` comment, or a `SET` directive must
/// carry one `VALUES (...) ON CONFLICT` clause with six values, the last of
/// which is a CEFR level code (A1, A2, B1, B2, C1, C2).
#[derive(Parser, Debug)]
#[command(name = "rowlint")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase log verbosity (-v for info, -vv for debug). RUST_LOG overrides.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

/// Available commands for rowlint.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Check every line of a SQL file.
    ///
    /// Reports unparsable lines, wrong column counts, and invalid level
    /// codes. All findings are printed; the scan never stops early.
    Check(CheckArgs),

    /// Show how a single line's values clause is split.
    ///
    /// Prints one parsed value per line.
    Tokenize(TokenizeArgs),

    /// Print the effective configuration as YAML.
    ///
    /// Shows the defaults, or the given config file after validation.
    /// The output can be saved and edited as a starting config.
    Config(ConfigArgs),
}

/// Output format for the `check` report.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// One line per finding, then a summary when clean.
    #[default]
    Text,
    /// The full scan report as a JSON document.
    Json,
}

/// Arguments for the `check` command.
#[derive(Parser, Debug)]
pub struct CheckArgs {
    /// SQL file to check.
    #[arg(default_value = "idioms.sql")]
    pub path: PathBuf,

    /// YAML config overriding the row layout and allowed levels.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Report format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

/// Arguments for the `tokenize` command.
#[derive(Parser, Debug)]
pub struct TokenizeArgs {
    /// A full statement line containing `VALUES (...) ON CONFLICT`.
    pub line: String,
}

/// Arguments for the `config` command.
#[derive(Parser, Debug)]
pub struct ConfigArgs {
    /// YAML config to load instead of the defaults.
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

impl Cli {
    /// Parse command line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
