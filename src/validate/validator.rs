//! Core validation logic for values-clause lines.

use crate::config::Config;
use crate::error::{Result, RowlintError};
use std::path::Path;
use tracing::{debug, info, trace};

use super::clause::extract_values_clause;
use super::line::{LineKind, classify_line};
use super::tokenizer::split_values;
use super::types::{Finding, ScanReport};

/// Validate a single data line and return every finding on it.
///
/// Checks run in order:
/// 1. Extract the values clause; if absent, report a parse failure and stop.
/// 2. Split the clause and compare the value count with `expected_columns`.
/// 3. If a value exists at `level_column`, check it against `allowed_levels`.
///
/// The level check still runs when the count is wrong, as long as the level
/// column is present. With too few values only the count finding is reported.
///
/// The caller is responsible for skipping directive lines; see
/// [`classify_line`].
pub fn validate_line(config: &Config, line_number: usize, line: &str) -> Vec<Finding> {
    let mut findings = Vec::new();

    let Some(clause) = extract_values_clause(line) else {
        findings.push(Finding::parse_failure(line_number));
        return findings;
    };

    let values = split_values(clause);

    if values.len() != config.expected_columns {
        findings.push(Finding::column_count(
            line_number,
            config.expected_columns,
            &values,
        ));
    }

    if let Some(level) = values.get(config.level_column) {
        if !is_allowed_level(config, level) {
            findings.push(Finding::invalid_level(line_number, level.as_str()));
        }
    }

    findings
}

/// Strip every single quote and surrounding whitespace from a level value.
pub fn normalize_level(value: &str) -> String {
    value.replace('\'', "").trim().to_string()
}

/// Whether `value`, once normalized, is one of the configured levels.
pub fn is_allowed_level(config: &Config, value: &str) -> bool {
    let cleaned = normalize_level(value);
    config.allowed_levels.iter().any(|level| *level == cleaned)
}

/// Validate every line of an in-memory source.
///
/// The whole source is scanned; findings from all lines are collected in
/// source order.
pub fn validate_source(config: &Config, source: &str) -> ScanReport {
    let mut report = ScanReport::default();

    for (index, line) in source.lines().enumerate() {
        let line_number = index + 1;
        report.lines_total += 1;

        match classify_line(line, &config.skip_prefixes) {
            LineKind::Skip => {
                trace!(line_number, "skipping directive line");
                report.lines_skipped += 1;
            }
            LineKind::Data => {
                report.data_lines += 1;
                let findings = validate_line(config, line_number, line);
                for finding in &findings {
                    debug!(line_number, kind = ?finding.kind, "finding");
                }
                report.findings.extend(findings);
            }
        }
    }

    report
}

/// Read a file and validate it.
///
/// The file is read fully into memory before scanning begins.
///
/// # Returns
///
/// * `Ok(ScanReport)` - Scan completed (findings do not make this an error)
/// * `Err(RowlintError::UserError)` - The file could not be read as UTF-8 text
pub fn validate_file(config: &Config, path: &Path) -> Result<ScanReport> {
    let source = std::fs::read_to_string(path).map_err(|e| {
        RowlintError::UserError(format!(
            "failed to read source file '{}': {}",
            path.display(),
            e
        ))
    })?;

    let report = validate_source(config, &source);

    info!(
        path = %path.display(),
        lines = report.lines_total,
        data_lines = report.data_lines,
        findings = report.findings.len(),
        "scan complete"
    );

    Ok(report)
}
