//! Implementation of the `rowlint tokenize` command.

use crate::cli::TokenizeArgs;
use crate::error::{Result, RowlintError};
use crate::validate::{extract_values_clause, split_values};
use std::io::Write;

use super::output_error;

/// Execute the `rowlint tokenize` command.
pub fn cmd_tokenize(args: TokenizeArgs) -> Result<()> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    run_tokenize(&args.line, &mut out)
}

/// Split the line's values clause and write `<column>: <value>` per value.
fn run_tokenize<W: Write>(line: &str, out: &mut W) -> Result<()> {
    let clause = extract_values_clause(line).ok_or_else(|| {
        RowlintError::UserError("Could not parse VALUES clause.".to_string())
    })?;

    for (index, value) in split_values(clause).iter().enumerate() {
        writeln!(out, "{}: {}", index + 1, value).map_err(output_error)?;
    }

    out.flush().map_err(output_error)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokenize_to_string(line: &str) -> Result<String> {
        let mut out = Vec::new();
        run_tokenize(line, &mut out)?;
        Ok(String::from_utf8(out).unwrap())
    }

    #[test]
    fn prints_numbered_values() {
        let output = tokenize_to_string(
            "INSERT INTO idioms VALUES ('a''b', 'c,d', 'B2') ON CONFLICT DO NOTHING;",
        )
        .unwrap();
        assert_eq!(output, "1: a'b\n2: c,d\n3: B2\n");
    }

    #[test]
    fn unparsable_line_is_user_error() {
        let err = tokenize_to_string("SELECT 1;").unwrap_err();
        assert!(matches!(err, RowlintError::UserError(_)));
        assert_eq!(err.to_string(), "Could not parse VALUES clause.");
    }
}
