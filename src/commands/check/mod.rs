//! Implementation of the `rowlint check` command.
//!
//! Loads the optional config, scans the source file, and writes the report
//! to stdout. Findings are reported but do not fail the command.

use crate::cli::{CheckArgs, OutputFormat};
use crate::config::Config;
use crate::error::{Result, RowlintError};
use crate::validate::{ScanReport, validate_file};
use std::io::Write;
use tracing::info;

use super::output_error;


/// Execute the `rowlint check` command.
pub fn cmd_check(args: CheckArgs) -> Result<()> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    run_check(&args, &mut out)
}

/// Run a check and write the report to `out`.
pub(crate) fn run_check<W: Write>(args: &CheckArgs, out: &mut W) -> Result<()> {
    let config = Config::load_or_default(args.config.as_deref())?;
    let report = validate_file(&config, &args.path)?;

    if !report.passed() {
        info!(
            findings = report.findings.len(),
            path = %args.path.display(),
            "structural problems found"
        );
    }

    write_report(&report, args.format, out)
}

/// Render a report in the requested format.
fn write_report<W: Write>(report: &ScanReport, format: OutputFormat, out: &mut W) -> Result<()> {
    match format {
        OutputFormat::Text => out
            .write_all(report.format_text().as_bytes())
            .map_err(output_error)?,
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(report).map_err(|e| {
                RowlintError::UserError(format!("failed to serialize report: {}", e))
            })?;
            writeln!(out, "{}", json).map_err(output_error)?;
        }
    }

    out.flush().map_err(output_error)
}
