//! Core types for scan findings and reports.

use serde::Serialize;
use std::fmt;

/// What went wrong on a single data line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FindingKind {
    /// No `VALUES (...) ON CONFLICT` clause was found.
    ParseFailure,
    /// The clause did not split into the expected number of values.
    ColumnCountMismatch {
        expected: usize,
        actual: usize,
        /// All values as parsed, in order.
        values: Vec<String>,
    },
    /// The level column held something outside the allowed set.
    InvalidLevel {
        /// The value as parsed, before quote stripping.
        value: String,
    },
}

/// A single finding, tied to its source line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Finding {
    /// Line number in the source file (1-based).
    pub line_number: usize,
    #[serde(flatten)]
    pub kind: FindingKind,
}

impl Finding {
    pub fn parse_failure(line_number: usize) -> Self {
        Self {
            line_number,
            kind: FindingKind::ParseFailure,
        }
    }

    pub fn column_count(line_number: usize, expected: usize, values: &[String]) -> Self {
        Self {
            line_number,
            kind: FindingKind::ColumnCountMismatch {
                expected,
                actual: values.len(),
                values: values.to_vec(),
            },
        }
    }

    pub fn invalid_level(line_number: usize, value: impl Into<String>) -> Self {
        Self {
            line_number,
            kind: FindingKind::InvalidLevel {
                value: value.into(),
            },
        }
    }
}

/// Renders the finding in the text report format.
///
/// ```text
/// Line 12: Could not parse VALUES clause.
/// Line 40: Incorrect column count. Expected 6, got 5.
/// Parsed: ['a', 'b', 'c', 'd', 'B1']
/// Line 41: Invalid level 'X9'
/// ```
impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            FindingKind::ParseFailure => {
                write!(f, "Line {}: Could not parse VALUES clause.", self.line_number)
            }
            FindingKind::ColumnCountMismatch {
                expected,
                actual,
                values,
            } => {
                writeln!(
                    f,
                    "Line {}: Incorrect column count. Expected {}, got {}.",
                    self.line_number, expected, actual
                )?;
                write!(f, "Parsed: {}", format_value_list(values))
            }
            FindingKind::InvalidLevel { value } => {
                write!(f, "Line {}: Invalid level '{}'", self.line_number, value)
            }
        }
    }
}

/// Result of scanning a whole source.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ScanReport {
    /// Findings in source order.
    pub findings: Vec<Finding>,
    /// Number of lines read.
    pub lines_total: usize,
    /// Lines skipped as blank, comment, or directive.
    pub lines_skipped: usize,
    /// Lines validated as data.
    pub data_lines: usize,
}

impl ScanReport {
    /// Whether the scan produced no findings of any kind.
    pub fn passed(&self) -> bool {
        self.findings.is_empty()
    }

    /// Format the report as the text written to stdout.
    ///
    /// Every finding is listed; the closing summary line only appears when
    /// there are none.
    pub fn format_text(&self) -> String {
        if self.passed() {
            return String::from("No structural errors found.\n");
        }

        let mut out = String::new();
        for finding in &self.findings {
            out.push_str(&finding.to_string());
            out.push('\n');
        }
        out
    }
}

/// Render values as a bracketed list of quoted strings, e.g. `['a', "it's"]`.
///
/// A value containing `'` but no `"` is wrapped in double quotes; otherwise
/// single quotes are used and embedded `'` is escaped.
pub fn format_value_list(values: &[String]) -> String {
    let items: Vec<String> = values.iter().map(|v| quote_value(v)).collect();
    format!("[{}]", items.join(", "))
}

fn quote_value(value: &str) -> String {
    let delimiter = if value.contains('\'') && !value.contains('"') {
        '"'
    } else {
        '\''
    };

    let mut out = String::with_capacity(value.len() + 2);
    out.push(delimiter);
    for ch in value.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '\t' => out.push_str("\\t"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            c if c == delimiter => {
                out.push('\\');
                out.push(c);
            }
            c => out.push(c),
        }
    }
    out.push(delimiter);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn parse_failure_message() {
        let finding = Finding::parse_failure(3);
        assert_eq!(finding.to_string(), "Line 3: Could not parse VALUES clause.");
    }

    #[test]
    fn column_count_message_spans_two_lines() {
        let finding = Finding::column_count(7, 6, &strings(&["a", "b", "c", "d", "B1"]));
        assert_eq!(
            finding.to_string(),
            "Line 7: Incorrect column count. Expected 6, got 5.\n\
             Parsed: ['a', 'b', 'c', 'd', 'B1']"
        );
    }

    #[test]
    fn invalid_level_message() {
        let finding = Finding::invalid_level(9, "X9");
        assert_eq!(finding.to_string(), "Line 9: Invalid level 'X9'");
    }

    #[test]
    fn value_list_quoting() {
        assert_eq!(format_value_list(&[]), "[]");
        assert_eq!(format_value_list(&strings(&["it's"])), "[\"it's\"]");
        assert_eq!(
            format_value_list(&strings(&["say \"it's\""])),
            "['say \"it\\'s\"']"
        );
        assert_eq!(format_value_list(&strings(&["a\\b"])), "['a\\\\b']");
        assert_eq!(format_value_list(&strings(&["", "x"])), "['', 'x']");
    }

    #[test]
    fn passing_report_prints_summary_only() {
        let report = ScanReport {
            lines_total: 2,
            lines_skipped: 1,
            data_lines: 1,
            ..Default::default()
        };
        assert!(report.passed());
        assert_eq!(report.format_text(), "No structural errors found.\n");
    }

    #[test]
    fn failing_report_lists_findings_without_summary() {
        let report = ScanReport {
            findings: vec![Finding::parse_failure(1), Finding::invalid_level(4, "Z")],
            lines_total: 4,
            lines_skipped: 0,
            data_lines: 4,
        };
        assert!(!report.passed());
        assert_eq!(
            report.format_text(),
            "Line 1: Could not parse VALUES clause.\nLine 4: Invalid level 'Z'\n"
        );
    }

    #[test]
    fn findings_serialize_with_kind_tag() {
        let json = serde_json::to_value(Finding::invalid_level(2, "X9")).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "line_number": 2, "kind": "invalid_level", "value": "X9" })
        );

        let json = serde_json::to_value(Finding::parse_failure(5)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "line_number": 5, "kind": "parse_failure" })
        );
    }
}
