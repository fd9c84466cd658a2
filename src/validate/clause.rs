//! Extraction of the `VALUES (...) ON CONFLICT` clause from a data line.
//!
//! Only the first clause on a line is considered. The closing
//! `) ON CONFLICT` suffix is part of the expected line format; statements
//! without it are not recognised.

use regex::Regex;
use std::sync::LazyLock;

static VALUES_CLAUSE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"VALUES \((.*?)\) ON CONFLICT").expect("Invalid VALUES clause regex")
});

/// Return the text between `VALUES (` and the nearest following
/// `) ON CONFLICT`, or `None` if the line has no such clause.
pub fn extract_values_clause(line: &str) -> Option<&str> {
    VALUES_CLAUSE_REGEX
        .captures(line)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_clause_body() {
        let line = "INSERT INTO idioms (a, b) VALUES ('x', 'y') ON CONFLICT (a) DO NOTHING;";
        assert_eq!(extract_values_clause(line), Some("'x', 'y'"));
    }

    #[test]
    fn missing_on_conflict_is_not_a_match() {
        let line = "INSERT INTO idioms (a, b) VALUES ('x', 'y');";
        assert_eq!(extract_values_clause(line), None);
    }

    #[test]
    fn missing_values_keyword_is_not_a_match() {
        assert_eq!(extract_values_clause("SELECT 1;"), None);
        assert_eq!(extract_values_clause(""), None);
    }

    #[test]
    fn keyword_is_case_sensitive() {
        let line = "insert into idioms values ('x') on conflict do nothing;";
        assert_eq!(extract_values_clause(line), None);
    }

    #[test]
    fn stops_at_first_on_conflict_suffix() {
        let line = "VALUES ('a') ON CONFLICT DO NOTHING; VALUES ('b') ON CONFLICT DO NOTHING;";
        assert_eq!(extract_values_clause(line), Some("'a'"));
    }

    #[test]
    fn parentheses_inside_values_are_kept() {
        let line = "VALUES ('to be (very) happy', 'B1') ON CONFLICT DO NOTHING;";
        assert_eq!(
            extract_values_clause(line),
            Some("'to be (very) happy', 'B1'")
        );
    }

    #[test]
    fn empty_clause_matches() {
        assert_eq!(extract_values_clause("VALUES () ON CONFLICT"), Some(""));
    }
}
