//! Line classification: directives are skipped, everything else is data.

/// How a source line is treated by the validator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    /// Blank line, comment, or session directive; not validated.
    Skip,
    /// Expected to carry one `VALUES (...) ON CONFLICT` clause.
    Data,
}

/// Classify a line using the configured skip prefixes.
///
/// Leading and trailing whitespace is ignored. An empty line is always
/// skipped; otherwise the line is skipped if it starts with any of
/// `skip_prefixes` (matched case-sensitively).
pub fn classify_line(line: &str, skip_prefixes: &[String]) -> LineKind {
    let trimmed = line.trim();

    if trimmed.is_empty() {
        return LineKind::Skip;
    }

    if skip_prefixes
        .iter()
        .any(|prefix| trimmed.starts_with(prefix.as_str()))
    {
        return LineKind::Skip;
    }

    LineKind::Data
}
